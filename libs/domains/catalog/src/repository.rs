use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::Product;

/// Repository trait for Product persistence.
///
/// Data access interface for the catalog. Implementations can use
/// different storage backends; the service layer only depends on this
/// trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and return its identity
    async fn save_product(&self, product: &Product) -> CatalogResult<Uuid>;

    /// Replace an existing product by id. Returns `false` when no
    /// document matched; no existence pre-check is performed here.
    async fn update_product(&self, product: &Product) -> CatalogResult<bool>;

    /// Delete a product by id. Idempotent: deleting an unknown id is a
    /// success.
    async fn delete_product(&self, id: Uuid) -> CatalogResult<bool>;

    /// Get a product by id. Absence is a valid empty result, not an error.
    async fn get_product_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Products whose category list contains the given label
    /// (case-sensitive exact match)
    async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Page of products in stable creation order. Pages are 1-based.
    async fn get_paged_products(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> CatalogResult<Vec<Product>>;
}
