//! HTTP plumbing shared by the catalog and order services

pub mod error;
pub mod middleware;

pub use error::{ApiError, ApiResult, ErrorBody, created, error_codes, ok};

use axum::{Router, http::StatusCode};
use tokio::net::TcpListener;

/// Health check endpoint polled by the registry
///
/// Always 200 `OK` while the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Bind the listening socket. The only fatal startup condition besides
/// unreadable config.
pub async fn bind(addr: &str) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Listening");
    Ok(listener)
}

/// Serve `app` until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
