//! HTTP handlers for the Ordering API

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderingResult;
use crate::models::{CreateCustomerCommand, CreateCustomerResult, Customer};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

/// OpenAPI documentation for the Ordering API
#[derive(OpenApi)]
#[openapi(
    paths(create_customer, get_customer_by_id),
    components(
        schemas(Customer, CreateCustomerCommand, CreateCustomerResult),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Customers", description = "Customer management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the customers router
pub fn router<R: CustomerRepository + 'static>(service: CustomerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", axum::routing::post(create_customer))
        .route("/{id}", get(get_customer_by_id))
        .with_state(shared_service)
}

/// Register a new customer
#[utoipa::path(
    post,
    path = "",
    tag = "Customers",
    request_body = CreateCustomerCommand,
    responses(
        (status = 201, description = "Customer created successfully", body = CreateCustomerResult),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    ValidatedJson(command): ValidatedJson<CreateCustomerCommand>,
) -> OrderingResult<impl IntoResponse> {
    let result = service.create_customer(command).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_customer_by_id<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> OrderingResult<Json<Customer>> {
    let customer = service.get_customer_by_id(id).await?;
    Ok(Json(customer))
}
