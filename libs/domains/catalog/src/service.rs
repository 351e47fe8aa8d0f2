//! Catalog service - one handler method per use case

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CreateProductCommand, CreateProductResult, DeleteProductCommand, DeleteProductResult,
    GetProductsQuery, Product, UpdateProductCommand, UpdateProductResult,
};
use crate::repository::ProductRepository;

/// Service layer for the product catalog.
///
/// Stateless; each method runs one use case: validate the command, call the
/// repository, shape the result. Validation always happens before any
/// persistence call.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product and return its assigned identity.
    #[instrument(skip(self, command), fields(product_name = %command.name))]
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> CatalogResult<CreateProductResult> {
        command.validate()?;

        let product = Product::new(command);
        let id = self.repository.save_product(&product).await?;

        Ok(CreateProductResult { id })
    }

    /// Replace an existing product. Fails with `NotFound` when the identity
    /// is unknown; never persists partially.
    #[instrument(skip(self, command), fields(product_id = %command.id))]
    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> CatalogResult<UpdateProductResult> {
        command.validate()?;

        let mut product = self
            .repository
            .get_product_by_id(command.id)
            .await?
            .ok_or(CatalogError::NotFound(command.id))?;

        product.apply_update(command);
        let success = self.repository.update_product(&product).await?;

        Ok(UpdateProductResult { success })
    }

    /// Delete a product. No existence pre-check; the success flag mirrors
    /// the repository result.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> CatalogResult<DeleteProductResult> {
        DeleteProductCommand { id }.validate()?;

        let success = self.repository.delete_product(id).await?;
        Ok(DeleteProductResult { success })
    }

    /// Get a product by id, converting absence into a typed `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .get_product_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Products carrying the given category label. An empty list is a valid
    /// outcome.
    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.repository.get_products_by_category(category).await
    }

    /// Paged product listing with defaults and clamping applied before the
    /// repository call.
    #[instrument(skip(self))]
    pub async fn get_products(&self, query: GetProductsQuery) -> CatalogResult<Vec<Product>> {
        let (page_number, page_size) = query.normalize();
        self.repository
            .get_paged_products(page_number, page_size)
            .await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;

    fn valid_create() -> CreateProductCommand {
        CreateProductCommand {
            name: "Test Product".to_string(),
            category: vec!["Books".to_string(), "Education".to_string()],
            description: "A sample product for testing".to_string(),
            image_file: "test-image.jpg".to_string(),
            price: 99.99,
        }
    }

    fn stored_product(id: Uuid) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: "Stored".to_string(),
            category: vec!["Books".to_string()],
            description: "Original".to_string(),
            image_file: "orig.jpg".to_string(),
            price: 10.0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_saves_once_with_verbatim_fields() {
        let mut repo = MockProductRepository::new();
        repo.expect_save_product()
            .withf(|p: &Product| {
                p.name == "Test Product"
                    && p.category == vec!["Books".to_string(), "Education".to_string()]
                    && p.description == "A sample product for testing"
                    && p.image_file == "test-image.jpg"
                    && p.price == 99.99
                    && !p.id.is_nil()
            })
            .times(1)
            .returning(|p| Ok(p.id));

        let service = ProductService::new(repo);
        let result = service.create_product(valid_create()).await.unwrap();

        assert!(!result.id.is_nil());
    }

    #[tokio::test]
    async fn create_with_invalid_input_never_touches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_save_product().never();

        let service = ProductService::new(repo);
        let command = CreateProductCommand {
            name: String::new(),
            category: vec![],
            description: String::new(),
            image_file: String::new(),
            price: 0.0,
        };

        let err = service.create_product(command).await.unwrap_err();
        match err {
            CatalogError::Validation(errors) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("name"));
                assert!(fields.contains_key("price"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_without_persisting() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_product().never();

        let service = ProductService::new(repo);
        let command = UpdateProductCommand {
            id,
            name: "Renamed".to_string(),
            category: vec!["Books".to_string()],
            description: String::new(),
            image_file: String::new(),
            price: 5.0,
        };

        let err = service.update_product(command).await.unwrap_err();
        match err {
            CatalogError::NotFound(missing) => assert_eq!(missing, id),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_overwrites_every_field_and_persists_once() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored_product(id))));
        repo.expect_update_product()
            .withf(move |p: &Product| {
                p.id == id
                    && p.name == "Renamed"
                    && p.category == vec!["Electronics".to_string()]
                    && p.description == "New description"
                    && p.image_file == "new.jpg"
                    && p.price == 49.5
            })
            .times(1)
            .returning(|_| Ok(true));

        let service = ProductService::new(repo);
        let command = UpdateProductCommand {
            id,
            name: "Renamed".to_string(),
            category: vec!["Electronics".to_string()],
            description: "New description".to_string(),
            image_file: "new.jpg".to_string(),
            price: 49.5,
        };

        let result = service.update_product(command).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn update_with_invalid_fields_never_touches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id().never();
        repo.expect_update_product().never();

        let service = ProductService::new(repo);
        let command = UpdateProductCommand {
            id: Uuid::nil(),
            name: String::new(),
            category: vec![],
            description: String::new(),
            image_file: String::new(),
            price: -1.0,
        };

        let err = service.update_product(command).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_calls_repository_once_and_mirrors_result() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_delete_product()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(true));

        let service = ProductService::new(repo);
        let result = service.delete_product(id).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn delete_rejects_nil_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete_product().never();

        let service = ProductService::new(repo);
        let err = service.delete_product(Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn get_by_unknown_id_reports_the_requested_identity() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product_by_id(id).await.unwrap_err();
        match err {
            CatalogError::NotFound(missing) => assert_eq!(missing, id),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_by_id_returns_product_when_present() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored_product(id))));

        let service = ProductService::new(repo);
        let product = service.get_product_by_id(id).await.unwrap();
        assert_eq!(product.id, id);
    }

    #[tokio::test]
    async fn category_with_no_matches_is_an_empty_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_products_by_category()
            .withf(|category| category == "NoSuchCategory")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(repo);
        let products = service
            .get_products_by_category("NoSuchCategory")
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn paged_query_applies_defaults_before_repository_call() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_paged_products()
            .withf(|page, size| *page == 1 && *size == 10)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ProductService::new(repo);
        let products = service
            .get_products(GetProductsQuery::default())
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn paged_query_clamps_out_of_range_values() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_paged_products()
            .withf(|page, size| *page == 1 && *size == 100)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ProductService::new(repo);
        let query = GetProductsQuery {
            page_number: Some(0),
            page_size: Some(5000),
        };
        service.get_products(query).await.unwrap();
    }

    #[tokio::test]
    async fn database_failures_bubble_unmodified() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Err(CatalogError::Database("connection reset".to_string())));

        let service = ProductService::new(repo);
        let err = service.get_product_by_id(Uuid::now_v7()).await.unwrap_err();
        match err {
            CatalogError::Database(msg) => assert_eq!(msg, "connection reset"),
            other => panic!("expected database error, got {other:?}"),
        }
    }
}
