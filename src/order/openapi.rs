//! OpenAPI document for the order service
//!
//! - Swagger UI: `http://localhost:8081/docs`
//! - OpenAPI JSON: `http://localhost:8081/api-docs/openapi.json`

use utoipa::OpenApi;

use super::model::{CreateOrderRequest, Order, OrderStatus};
use crate::http::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Accepts cafe orders after locating the food catalog service."
    ),
    servers(
        (url = "http://localhost:8081", description = "Development"),
    ),
    paths(
        crate::http::health_check,
        crate::order::handlers::create_order,
        crate::order::handlers::list_orders,
        crate::order::handlers::preflight,
    ),
    components(schemas(Order, OrderStatus, CreateOrderRequest, ErrorBody)),
    tags(
        (name = "Orders", description = "Order placement and read-back"),
        (name = "System", description = "Health checks")
    )
)]
pub struct OrderApiDoc;
