//! Order service
//!
//! Accepts orders, locates the catalog service through the configured
//! resolver before every write, and keeps orders in memory for read-back.

pub mod handlers;
pub mod model;
pub mod openapi;
pub mod service;
pub mod state;
pub mod store;

pub use model::{CreateOrderRequest, Order, OrderStatus};
pub use service::{OrderError, OrderService};
pub use state::AppState;
pub use store::OrderStore;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, middleware::from_fn, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, ServiceConfig};
use crate::discovery;
use crate::http::{
    self,
    middleware::{log_request, permissive_cors},
};
use crate::registry;

/// Build the order router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(http::health_check))
        .route(
            "/orders",
            get(handlers::list_orders)
                .post(handlers::create_order)
                .options(handlers::preflight),
        )
        .with_state(state)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::OrderApiDoc::openapi()),
        )
        .layer(from_fn(permissive_cors))
        .layer(from_fn(log_request))
}

/// Start the order service: registration in the background, then serve.
pub async fn run_server(config: &AppConfig, service: &ServiceConfig) -> Result<()> {
    registry::register_in_background(service, &config.registry);

    let resolver = discovery::build_resolver(&config.discovery, &config.registry)
        .context("Failed to build service resolver")?;
    let state = Arc::new(AppState::new(Arc::new(OrderStore::new()), resolver));

    let addr = service.bind_addr();
    let listener = http::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!(
        service = %service.name,
        "Order Service starting on port {}",
        service.port
    );

    http::serve(listener, router(state))
        .await
        .context("Server error")
}
