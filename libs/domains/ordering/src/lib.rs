//! Ordering Domain
//!
//! Customer registration and lookup backed by MongoDB. Same layering as
//! the catalog domain: models, repository trait + Mongo implementation,
//! service, HTTP handlers. Customers carry no references to catalog
//! products.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OrderingError, OrderingResult};
pub use handlers::ApiDoc;
pub use models::{CreateCustomerCommand, CreateCustomerResult, Customer};
pub use mongodb::MongoCustomerRepository;
pub use repository::CustomerRepository;
pub use service::CustomerService;
