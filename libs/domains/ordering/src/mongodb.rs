//! MongoDB implementation of CustomerRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::OrderingResult;
use crate::models::Customer;
use crate::repository::CustomerRepository;

/// MongoDB implementation of the CustomerRepository
pub struct MongoCustomerRepository {
    collection: Collection<Customer>,
}

impl MongoCustomerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Customer>("customers");
        Self { collection }
    }

    /// Repository backed by a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Customer>(collection_name);
        Self { collection }
    }

    /// Initialize indexes
    pub async fn init_indexes(&self) -> OrderingResult<()> {
        let indexes = vec![IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_email".to_string())
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Customer indexes created successfully");
        Ok(())
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    #[instrument(skip(self, customer), fields(customer_id = %customer.id))]
    async fn save_customer(&self, customer: &Customer) -> OrderingResult<Uuid> {
        self.collection.insert_one(customer).await?;

        tracing::info!(customer_id = %customer.id, "Customer created successfully");
        Ok(customer.id)
    }

    #[instrument(skip(self))]
    async fn get_customer_by_id(&self, id: Uuid) -> OrderingResult<Option<Customer>> {
        let customer = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(customer)
    }
}
