//! Integration tests for MongoCustomerRepository. Require Docker;
//! run with `cargo test -p domain_ordering -- --ignored`.

use domain_ordering::{
    CreateCustomerCommand, Customer, CustomerRepository, MongoCustomerRepository,
};
use test_utils::TestMongo;
use uuid::Uuid;

#[tokio::test]
#[ignore] // Requires Docker
async fn save_and_get_round_trip() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("ordering_test");
    let repo = MongoCustomerRepository::with_collection(&db, "customers_save_get");
    repo.init_indexes().await.unwrap();

    let customer = Customer::new(CreateCustomerCommand {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    });

    let id = repo.save_customer(&customer).await.unwrap();
    assert_eq!(id, customer.id);

    let found = repo.get_customer_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, customer);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn get_unknown_id_returns_none() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("ordering_test");
    let repo = MongoCustomerRepository::with_collection(&db, "customers_get_unknown");

    let found = repo.get_customer_by_id(Uuid::now_v7()).await.unwrap();
    assert!(found.is_none());
}
