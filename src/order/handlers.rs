//! Order handlers (create, list)

use std::collections::HashMap;
use std::sync::Arc;

use axum::{body::Bytes, extract::State};

use super::model::{CreateOrderRequest, Order};
use super::service::{OrderError, OrderService};
use super::state::AppState;
use crate::http::{ApiError, ApiResult, ErrorBody, created, error_codes, ok};

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Decode(e) => ApiError::malformed_body(e),
            OrderError::Validation(e) => ApiError::bad_request(e),
            OrderError::DependencyUnavailable(e) => {
                tracing::error!(error = %e, "Error finding catalog service");
                ApiError::new(
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::DEPENDENCY_UNAVAILABLE,
                    "Food catalog service not available",
                )
            }
        }
    }
}

/// Create order endpoint
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body(content = CreateOrderRequest, description = "Items to order", content_type = "application/json"),
    responses(
        (status = 201, description = "Order received", body = Order, content_type = "application/json"),
        (status = 400, description = "Malformed or empty order", body = ErrorBody),
        (status = 500, description = "Catalog service not available", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Order> {
    let service = OrderService::new(&state.orders, state.resolver.as_ref());
    let order = service.create_order(&body).await?;
    created(order)
}

/// List every order, keyed by id
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = HashMap<String, Order>, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<HashMap<String, Order>> {
    ok(state.orders.snapshot())
}

/// CORS preflight
///
/// OPTIONS /orders
///
/// Only here so the OpenAPI document lists the operation; `permissive_cors`
/// answers every OPTIONS request before routing.
#[utoipa::path(
    options,
    path = "/orders",
    responses((status = 200, description = "Preflight accepted")),
    tag = "Orders"
)]
pub async fn preflight() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}
