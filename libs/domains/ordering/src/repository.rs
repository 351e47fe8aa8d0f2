use async_trait::async_trait;
use uuid::Uuid;

use crate::error::OrderingResult;
use crate::models::Customer;

/// Repository trait for Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer and return its identity
    async fn save_customer(&self, customer: &Customer) -> OrderingResult<Uuid>;

    /// Get a customer by id. Absence is a valid empty result, not an error.
    async fn get_customer_by_id(&self, id: Uuid) -> OrderingResult<Option<Customer>>;
}
