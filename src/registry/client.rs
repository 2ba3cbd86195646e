//! Registry HTTP client
//!
//! Talks to a Consul-compatible agent over its HTTP API:
//! - `PUT  /v1/agent/service/register` to announce an instance
//! - `GET  /v1/health/service/{name}?passing=true` to list healthy instances

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::error::{RegistrationError, RegistryError};
use super::registration::ServiceRegistration;

/// Health entry for one instance, as returned by the health endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthEntry {
    #[serde(rename = "Node")]
    pub node: NodeInfo,
    #[serde(rename = "Service")]
    pub service: InstanceInfo,
    #[serde(rename = "Checks", default)]
    pub checks: Vec<CheckInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfo {
    #[serde(rename = "Address", default)]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceInfo {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckInfo {
    #[serde(rename = "Status")]
    pub status: String,
}

impl HealthEntry {
    /// True only when every attached check reports `passing`
    pub fn is_passing(&self) -> bool {
        self.checks.iter().all(|c| c.status == "passing")
    }

    /// Base URL of the instance. An empty service address means the
    /// instance shares the node's address.
    pub fn base_url(&self) -> String {
        let host = if self.service.address.is_empty() {
            &self.node.address
        } else {
            &self.service.address
        };
        format!("http://{}:{}", host, self.service.port)
    }
}

#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
    http: reqwest::Client,
}

impl RegistryClient {
    pub fn new(address: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RegistryError::Client)?;

        Ok(Self {
            base_url: address.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn address(&self) -> &str {
        &self.base_url
    }

    /// Announce an instance. Single attempt, no retry.
    pub async fn register(
        &self,
        registration: &ServiceRegistration,
    ) -> Result<(), RegistrationError> {
        let url = format!("{}/v1/agent/service/register", self.base_url);
        debug!(url = %url, id = %registration.id, "Sending registration");

        let resp = self
            .http
            .put(&url)
            .json(registration)
            .send()
            .await
            .map_err(|source| RegistryError::Unreachable {
                address: self.base_url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    /// Instances of `service` the registry reports as passing
    pub async fn healthy_instances(&self, service: &str) -> Result<Vec<HealthEntry>, RegistryError> {
        let url = format!("{}/v1/health/service/{}", self.base_url, service);

        let resp = self
            .http
            .get(&url)
            .query(&[("passing", "true")])
            .send()
            .await
            .map_err(|source| RegistryError::Unreachable {
                address: self.base_url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<Vec<HealthEntry>>()
            .await
            .map_err(RegistryError::Decode)
    }
}

/// Register in the background. The outcome is only logged; serving never
/// waits on it and no handle is kept.
pub fn spawn_registration(client: RegistryClient, registration: ServiceRegistration) {
    tokio::spawn(async move {
        match client.register(&registration).await {
            Ok(()) => info!(
                service = %registration.name,
                id = %registration.id,
                registry = %client.address(),
                "Successfully registered service with registry"
            ),
            Err(e) => warn!(
                service = %registration.name,
                id = %registration.id,
                error = %e,
                "Could not register with registry, continuing unregistered"
            ),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(service_addr: &str, node_addr: &str, statuses: &[&str]) -> HealthEntry {
        HealthEntry {
            node: NodeInfo {
                address: node_addr.to_string(),
            },
            service: InstanceInfo {
                id: "food-catalog-service".to_string(),
                service: "food-catalog-service".to_string(),
                address: service_addr.to_string(),
                port: 8080,
            },
            checks: statuses
                .iter()
                .map(|s| CheckInfo {
                    status: s.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_base_url_prefers_service_address() {
        let e = entry("food-catalog-service", "10.0.0.7", &["passing"]);
        assert_eq!(e.base_url(), "http://food-catalog-service:8080");
    }

    #[test]
    fn test_base_url_falls_back_to_node() {
        let e = entry("", "10.0.0.7", &["passing"]);
        assert_eq!(e.base_url(), "http://10.0.0.7:8080");
    }

    #[test]
    fn test_is_passing_requires_all_checks() {
        assert!(entry("a", "b", &["passing", "passing"]).is_passing());
        assert!(!entry("a", "b", &["passing", "critical"]).is_passing());
        assert!(!entry("a", "b", &["warning"]).is_passing());
    }

    #[test]
    fn test_decode_health_response() {
        let json = r#"[
            {
                "Node": {"Node": "agent-1", "Address": "172.18.0.2"},
                "Service": {"ID": "food-catalog-service", "Service": "food-catalog-service",
                            "Address": "food-catalog-service", "Port": 8080, "Tags": []},
                "Checks": [{"CheckID": "serfHealth", "Status": "passing"},
                           {"CheckID": "service:food-catalog-service", "Status": "passing"}]
            }
        ]"#;

        let entries: Vec<HealthEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_passing());
        assert_eq!(entries[0].base_url(), "http://food-catalog-service:8080");
    }

    #[test]
    fn test_address_trailing_slash_trimmed() {
        let client = RegistryClient::new("http://consul:8500/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.address(), "http://consul:8500");
    }
}
