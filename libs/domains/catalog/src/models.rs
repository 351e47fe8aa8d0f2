use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a catalog product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Category labels the product belongs to (at least one)
    pub category: Vec<String>,
    /// Product description
    pub description: String,
    /// Image filename or URL, stored opaque
    pub image_file: String,
    /// Unit price
    pub price: f64,
    /// Creation timestamp, drives stable page ordering
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Command for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductCommand {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: f64,
}

/// Command for replacing an existing product. Full-replace semantics:
/// every field is resent and overwritten, identity stays immutable.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProductCommand {
    #[validate(custom(function = validate_id_not_nil))]
    pub id: Uuid,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: f64,
}

fn validate_id_not_nil(id: &Uuid) -> Result<(), validator::ValidationError> {
    if id.is_nil() {
        let mut error = validator::ValidationError::new("id_required");
        error.message = Some("Id is required".into());
        return Err(error);
    }
    Ok(())
}

/// Deletion request. Only the identity is checked; no existence pre-check.
#[derive(Debug, Clone, Validate)]
pub struct DeleteProductCommand {
    #[validate(custom(function = validate_id_not_nil))]
    pub id: Uuid,
}

/// Paged listing query. Both parameters are optional; defaults and clamping
/// are applied by [`GetProductsQuery::normalize`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct GetProductsQuery {
    /// 1-based page number (default: 1)
    pub page_number: Option<u32>,
    /// Page size (default: 10, max: 100)
    pub page_size: Option<u32>,
}

/// Default page size when unspecified or out of range.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound for page size.
pub const MAX_PAGE_SIZE: u32 = 100;

impl GetProductsQuery {
    /// Resolve `(page_number, page_size)` with defaults applied and
    /// out-of-range values clamped.
    pub fn normalize(&self) -> (u32, u32) {
        let page_number = match self.page_number {
            Some(n) if n >= 1 => n,
            _ => 1,
        };
        let page_size = match self.page_size {
            Some(s) if s >= 1 => s.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        (page_number, page_size)
    }
}

/// Result of a successful product creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductResult {
    /// Identity assigned to the new product
    pub id: Uuid,
}

/// Result of a product update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductResult {
    pub success: bool,
}

/// Result of a product deletion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteProductResult {
    pub success: bool,
}

impl Product {
    /// Build a new product from a create command, assigning identity and
    /// timestamps.
    pub fn new(input: CreateProductCommand) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            category: input.category,
            description: input.description,
            image_file: input.image_file,
            price: input.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every replaceable field from an update command. Identity
    /// and creation timestamp are untouched.
    pub fn apply_update(&mut self, update: UpdateProductCommand) {
        self.name = update.name;
        self.category = update.category;
        self.description = update.description;
        self.image_file = update.image_file;
        self.price = update.price;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_create() -> CreateProductCommand {
        CreateProductCommand {
            name: "Test Product".to_string(),
            category: vec!["Books".to_string(), "Education".to_string()],
            description: "A sample product for testing".to_string(),
            image_file: "test-image.jpg".to_string(),
            price: 99.99,
        }
    }

    #[test]
    fn create_command_accepts_valid_input() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_command_reports_all_violations_together() {
        let command = CreateProductCommand {
            name: String::new(),
            category: vec![],
            description: String::new(),
            image_file: String::new(),
            price: 0.0,
        };

        let errors = command.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn update_command_rejects_nil_id() {
        let command = UpdateProductCommand {
            id: Uuid::nil(),
            name: "Test Product".to_string(),
            category: vec!["Books".to_string()],
            description: String::new(),
            image_file: String::new(),
            price: 10.0,
        };

        let errors = command.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("id"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut command = valid_create();
        command.price = -1.0;
        assert!(command.validate().is_err());
    }

    #[test]
    fn product_new_copies_fields_verbatim() {
        let input = valid_create();
        let product = Product::new(input.clone());

        assert!(!product.id.is_nil());
        assert_eq!(product.name, input.name);
        assert_eq!(product.category, input.category);
        assert_eq!(product.description, input.description);
        assert_eq!(product.image_file, input.image_file);
        assert_eq!(product.price, input.price);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn apply_update_overwrites_every_field_but_identity() {
        let mut product = Product::new(valid_create());
        let id = product.id;
        let created_at = product.created_at;

        product.apply_update(UpdateProductCommand {
            id,
            name: "Renamed".to_string(),
            category: vec!["Electronics".to_string()],
            description: "New description".to_string(),
            image_file: "new.jpg".to_string(),
            price: 49.5,
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Renamed");
        assert_eq!(product.category, vec!["Electronics".to_string()]);
        assert_eq!(product.description, "New description");
        assert_eq!(product.image_file, "new.jpg");
        assert_eq!(product.price, 49.5);
    }

    #[test]
    fn query_normalize_applies_defaults() {
        assert_eq!(GetProductsQuery::default().normalize(), (1, 10));
    }

    #[test]
    fn query_normalize_clamps_out_of_range_values() {
        let query = GetProductsQuery {
            page_number: Some(0),
            page_size: Some(0),
        };
        assert_eq!(query.normalize(), (1, 10));

        let query = GetProductsQuery {
            page_number: Some(3),
            page_size: Some(1000),
        };
        assert_eq!(query.normalize(), (3, 100));
    }
}
