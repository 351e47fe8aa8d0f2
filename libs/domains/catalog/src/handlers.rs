//! HTTP handlers for the Catalog API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CreateProductCommand, CreateProductResult, DeleteProductResult, GetProductsQuery, Product,
    UpdateProductCommand, UpdateProductResult,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_products,
        create_product,
        update_product,
        get_product_by_id,
        delete_product,
        get_products_by_category,
    ),
    components(
        schemas(
            Product, CreateProductCommand, UpdateProductCommand, GetProductsQuery,
            CreateProductResult, UpdateProductResult, DeleteProductResult
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_products).post(create_product).put(update_product),
        )
        .route("/category/{category}", get(get_products_by_category))
        .route("/{id}", get(get_product_by_id).delete(delete_product))
        .with_state(shared_service)
}

/// List products, paged
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(GetProductsQuery),
    responses(
        (status = 200, description = "Page of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<GetProductsQuery>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.get_products(query).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProductCommand,
    responses(
        (status = 201, description = "Product created successfully", body = CreateProductResult),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(command): ValidatedJson<CreateProductCommand>,
) -> CatalogResult<impl IntoResponse> {
    let result = service.create_product(command).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Replace an existing product. The identity travels in the body; callers
/// resend every field.
#[utoipa::path(
    put,
    path = "",
    tag = "Products",
    request_body = UpdateProductCommand,
    responses(
        (status = 200, description = "Product updated successfully", body = UpdateProductResult),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(command): ValidatedJson<UpdateProductCommand>,
) -> CatalogResult<Json<UpdateProductResult>> {
    let result = service.update_product(command).await?;
    Ok(Json(result))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product_by_id(id).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResult),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DeleteProductResult>> {
    let result = service.delete_product(id).await?;
    Ok(Json(result))
}

/// Get products carrying a category label
#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = "Products",
    params(
        ("category" = String, Path, description = "Category label (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Products in category", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(category): Path<String>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.get_products_by_category(&category).await?;
    Ok(Json(products))
}
