//! Customers API routes

use axum::Router;
use domain_ordering::{handlers, CustomerService, MongoCustomerRepository};

use crate::state::AppState;

/// Create customers router
pub fn router(state: &AppState) -> Router {
    let repository = MongoCustomerRepository::new(&state.db);
    let service = CustomerService::new(repository);
    handlers::router(service)
}

/// Initialize customers indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoCustomerRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
