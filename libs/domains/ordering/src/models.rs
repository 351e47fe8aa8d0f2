use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Customer aggregate stored in MongoDB. Independent of the catalog; no
/// references to Product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Command for registering a new customer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerCommand {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
}

/// Result of a successful customer registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerResult {
    pub id: Uuid,
}

impl Customer {
    /// Build a new customer from a create command, assigning identity and
    /// creation timestamp.
    pub fn new(input: CreateCustomerCommand) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            created_at: Utc::now(),
        }
    }
}
