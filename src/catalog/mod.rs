//! Food catalog service
//!
//! Serves the fixed menu read-only and registers itself with the registry
//! at startup.

pub mod handlers;
pub mod items;
pub mod openapi;

pub use items::{Catalog, CatalogItem};

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, middleware::from_fn, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, ServiceConfig};
use crate::http::{self, middleware::log_request};
use crate::registry;

/// Build the catalog router
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(http::health_check))
        .route("/items", get(handlers::list_items))
        .with_state(catalog)
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", openapi::CatalogApiDoc::openapi()),
        )
        .layer(from_fn(log_request))
}

/// Start the catalog service: registration in the background, then serve.
pub async fn run_server(config: &AppConfig, service: &ServiceConfig) -> Result<()> {
    registry::register_in_background(service, &config.registry);

    let addr = service.bind_addr();
    let listener = http::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!(
        service = %service.name,
        "Food Catalog Service starting on port {}",
        service.port
    );

    http::serve(listener, router(Arc::new(Catalog::seeded())))
        .await
        .context("Server error")
}
