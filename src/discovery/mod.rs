//! Service discovery
//!
//! Translates a logical service name into a base URL for outbound calls.
//! Two interchangeable resolvers sit behind [`ServiceResolver`]:
//!
//! - [`StaticResolver`]: fixed name -> URL table for a fixed topology
//! - [`RegistryResolver`]: healthy instances from the registry, round-robin
//!
//! Which one a service uses is decided by `discovery.mode` in the config.

pub mod registry;
pub mod static_table;

pub use registry::RegistryResolver;
pub use static_table::StaticResolver;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{DiscoveryConfig, DiscoveryMode, RegistryConfig};
use crate::registry::{RegistryClient, RegistryError};

/// Logical name of the catalog service
pub const FOOD_CATALOG_SERVICE: &str = "food-catalog-service";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("No healthy instance of {0}")]
    NoHealthyInstance(String),

    #[error("Registry lookup for {service} failed: {source}")]
    Registry {
        service: String,
        #[source]
        source: RegistryError,
    },

    #[error("Registry lookup for {service} timed out after {timeout_ms}ms")]
    Timeout { service: String, timeout_ms: u64 },
}

/// Resolves a logical service name to a base URL.
///
/// Errors are recoverable: callers fail the current request, not the process.
#[async_trait]
pub trait ServiceResolver: Send + Sync {
    /// Resolver name for logging
    fn kind(&self) -> &'static str;

    async fn resolve(&self, service_name: &str) -> Result<String, DiscoveryError>;
}

/// Build the resolver selected by `discovery.mode`
pub fn build_resolver(
    discovery: &DiscoveryConfig,
    registry: &RegistryConfig,
) -> Result<Arc<dyn ServiceResolver>, RegistryError> {
    let resolver: Arc<dyn ServiceResolver> = match discovery.mode {
        DiscoveryMode::Static => Arc::new(StaticResolver::new(discovery.services.clone())),
        DiscoveryMode::Registry => {
            let client = RegistryClient::new(
                &registry.address,
                Duration::from_millis(registry.timeout_ms),
            )?;
            Arc::new(RegistryResolver::new(
                client,
                Duration::from_millis(discovery.timeout_ms),
                Duration::from_millis(discovery.cache_ttl_ms),
            ))
        }
    };

    tracing::info!(resolver = resolver.kind(), "Service discovery configured");
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_static_resolver() {
        let resolver =
            build_resolver(&DiscoveryConfig::default(), &RegistryConfig::default()).unwrap();
        assert_eq!(resolver.kind(), "static");
    }

    #[test]
    fn test_build_registry_resolver() {
        let discovery = DiscoveryConfig {
            mode: DiscoveryMode::Registry,
            ..DiscoveryConfig::default()
        };
        let resolver = build_resolver(&discovery, &RegistryConfig::default()).unwrap();
        assert_eq!(resolver.kind(), "registry");
    }

    #[tokio::test]
    async fn test_default_table_resolves_catalog() {
        let resolver =
            build_resolver(&DiscoveryConfig::default(), &RegistryConfig::default()).unwrap();
        let url = resolver.resolve(FOOD_CATALOG_SERVICE).await.unwrap();
        assert_eq!(url, "http://food-catalog-service:8080");
    }
}
