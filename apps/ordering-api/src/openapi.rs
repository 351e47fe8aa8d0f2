//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Ordering API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ordering API",
        version = "0.1.0",
        description = "Customer management API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    nest(
        (path = "/api/customers", api = domain_ordering::ApiDoc)
    ),
    tags(
        (name = "Customers", description = "Customer management endpoints")
    )
)]
pub struct ApiDoc;
