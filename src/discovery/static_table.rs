use std::collections::HashMap;

use async_trait::async_trait;

use super::{DiscoveryError, ServiceResolver};

/// Fixed name -> base URL table. Valid only for a fixed deployment topology.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    table: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new(table: HashMap<String, String>) -> Self {
        let table = table
            .into_iter()
            .map(|(name, url)| (name, url.trim_end_matches('/').to_string()))
            .collect();
        Self { table }
    }

    pub fn with_service(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        self.table
            .insert(name.into(), url.trim_end_matches('/').to_string());
        self
    }
}

#[async_trait]
impl ServiceResolver for StaticResolver {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn resolve(&self, service_name: &str) -> Result<String, DiscoveryError> {
        self.table
            .get(service_name)
            .cloned()
            .ok_or_else(|| DiscoveryError::UnknownService(service_name.to_string()))
    }
}
