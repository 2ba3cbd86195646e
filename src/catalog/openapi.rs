//! OpenAPI document for the catalog service
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use super::items::CatalogItem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Catalog Service API",
        version = "1.0.0",
        description = "Read-only menu of the student cafe."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::http::health_check,
        crate::catalog::handlers::list_items,
    ),
    components(schemas(CatalogItem)),
    tags(
        (name = "Catalog", description = "Menu items"),
        (name = "System", description = "Health checks")
    )
)]
pub struct CatalogApiDoc;
