//! Service registry integration
//!
//! Self-registration of an instance with an HTTP health check, plus the
//! health query the registry-backed resolver reads from.

pub mod client;
pub mod error;
pub mod registration;

pub use client::{HealthEntry, RegistryClient, spawn_registration};
pub use error::{RegistrationError, RegistryError};
pub use registration::{HealthCheck, ServiceRegistration};

use std::time::Duration;

use crate::config::{RegistryConfig, ServiceConfig};

/// Best-effort startup registration for one service.
///
/// Returns immediately. Disabled registry or client construction failure is
/// logged and otherwise ignored.
pub fn register_in_background(service: &ServiceConfig, registry: &RegistryConfig) {
    if !registry.enabled {
        tracing::info!(service = %service.name, "Registry disabled, skipping registration");
        return;
    }

    let client = match RegistryClient::new(
        &registry.address,
        Duration::from_millis(registry.timeout_ms),
    ) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "Could not create registry client");
            return;
        }
    };

    spawn_registration(client, ServiceRegistration::from_config(service, registry));
}
