//! Registry-backed resolver
//!
//! Asks the registry for instances passing their health checks and hands
//! them out round-robin. Results may be reused for `cache_ttl`, which bounds
//! staleness; a zero TTL queries the registry on every lookup.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{DiscoveryError, ServiceResolver};
use crate::registry::{HealthEntry, RegistryClient};

struct CachedInstances {
    fetched_at: Instant,
    urls: Arc<Vec<String>>,
}

pub struct RegistryResolver {
    client: RegistryClient,
    timeout: Duration,
    cache_ttl: Duration,
    cache: DashMap<String, CachedInstances>,
    cursor: AtomicUsize,
}

impl RegistryResolver {
    pub fn new(client: RegistryClient, timeout: Duration, cache_ttl: Duration) -> Self {
        Self {
            client,
            timeout,
            cache_ttl,
            cache: DashMap::new(),
            cursor: AtomicUsize::new(0),
        }
    }

    fn cached(&self, service_name: &str) -> Option<Arc<Vec<String>>> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let entry = self.cache.get(service_name)?;
        if entry.fetched_at.elapsed() < self.cache_ttl {
            Some(entry.urls.clone())
        } else {
            None
        }
    }

    async fn healthy_urls(&self, service_name: &str) -> Result<Arc<Vec<String>>, DiscoveryError> {
        if let Some(urls) = self.cached(service_name) {
            return Ok(urls);
        }

        let entries = tokio::time::timeout(self.timeout, self.client.healthy_instances(service_name))
            .await
            .map_err(|_| DiscoveryError::Timeout {
                service: service_name.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            })?
            .map_err(|source| DiscoveryError::Registry {
                service: service_name.to_string(),
                source,
            })?;

        // Instances with any non-passing check are never handed out.
        let urls: Vec<String> = entries
            .iter()
            .filter(|e| e.is_passing())
            .map(HealthEntry::base_url)
            .collect();
        debug!(
            service = service_name,
            total = entries.len(),
            passing = urls.len(),
            "Fetched instances from registry"
        );

        let urls = Arc::new(urls);
        if !self.cache_ttl.is_zero() && !urls.is_empty() {
            self.cache.insert(
                service_name.to_string(),
                CachedInstances {
                    fetched_at: Instant::now(),
                    urls: urls.clone(),
                },
            );
        }
        Ok(urls)
    }
}

#[async_trait]
impl ServiceResolver for RegistryResolver {
    fn kind(&self) -> &'static str {
        "registry"
    }

    async fn resolve(&self, service_name: &str) -> Result<String, DiscoveryError> {
        let urls = self.healthy_urls(service_name).await?;
        if urls.is_empty() {
            return Err(DiscoveryError::NoHealthyInstance(service_name.to_string()));
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % urls.len();
        Ok(urls[idx].clone())
    }
}
