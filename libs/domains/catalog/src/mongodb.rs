//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Repository backed by a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for the query patterns the catalog serves
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            // Category containment lookups
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            // Stable page ordering
            IndexModel::builder()
                .keys(doc! { "created_at": 1, "_id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save_product(&self, product: &Product) -> CatalogResult<Uuid> {
        self.collection.insert_one(product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product.id)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update_product(&self, product: &Product) -> CatalogResult<bool> {
        let filter = Self::id_filter(product.id);
        let result = self.collection.replace_one(filter, product).await?;

        let matched = result.matched_count > 0;
        if matched {
            tracing::info!(product_id = %product.id, "Product updated successfully");
        } else {
            tracing::debug!(product_id = %product.id, "Update matched no product");
        }
        Ok(matched)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: Uuid) -> CatalogResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            tracing::debug!(product_id = %id, "Delete matched no product, treating as success");
        } else {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn get_product_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        // Array containment: matches documents whose category list holds the label
        let filter = doc! { "category": category };

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": 1, "_id": 1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_paged_products(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> CatalogResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let skip = u64::from(page_number - 1) * u64::from(page_size);

        let options = mongodb::options::FindOptions::builder()
            .limit(i64::from(page_size))
            .skip(skip)
            .sort(doc! { "created_at": 1, "_id": 1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }
}
