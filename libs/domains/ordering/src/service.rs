//! Ordering service - customer use cases

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{OrderingError, OrderingResult};
use crate::models::{CreateCustomerCommand, CreateCustomerResult, Customer};
use crate::repository::CustomerRepository;

/// Service layer for the ordering domain. Stateless; validation runs
/// before any persistence call.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new customer and return its assigned identity.
    #[instrument(skip(self, command), fields(customer_name = %command.name))]
    pub async fn create_customer(
        &self,
        command: CreateCustomerCommand,
    ) -> OrderingResult<CreateCustomerResult> {
        command.validate()?;

        let customer = Customer::new(command);
        let id = self.repository.save_customer(&customer).await?;

        Ok(CreateCustomerResult { id })
    }

    /// Get a customer by id, converting absence into a typed `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_customer_by_id(&self, id: Uuid) -> OrderingResult<Customer> {
        self.repository
            .get_customer_by_id(id)
            .await?
            .ok_or(OrderingError::NotFound(id))
    }
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCustomerRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn create_saves_once_and_returns_identity() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_save_customer()
            .withf(|c: &Customer| {
                c.name == "Ada Lovelace" && c.email == "ada@example.com" && !c.id.is_nil()
            })
            .times(1)
            .returning(|c| Ok(c.id));

        let service = CustomerService::new(repo);
        let result = service
            .create_customer(CreateCustomerCommand {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert!(!result.id.is_nil());
    }

    #[tokio::test]
    async fn invalid_command_never_touches_repository() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_save_customer().never();

        let service = CustomerService::new(repo);
        let err = service
            .create_customer(CreateCustomerCommand {
                name: String::new(),
                email: "nope".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OrderingError::Validation(_)));
    }

    #[tokio::test]
    async fn get_unknown_customer_reports_the_requested_identity() {
        let id = Uuid::now_v7();
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CustomerService::new(repo);
        let err = service.get_customer_by_id(id).await.unwrap_err();
        match err {
            OrderingError::NotFound(missing) => assert_eq!(missing, id),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_known_customer_returns_it() {
        let id = Uuid::now_v7();
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .times(1)
            .returning(move |_| {
                Ok(Some(Customer {
                    id,
                    name: "Ada Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                    created_at: Utc::now(),
                }))
            });

        let service = CustomerService::new(repo);
        let customer = service.get_customer_by_id(id).await.unwrap();
        assert_eq!(customer.id, id);
    }
}
