//! Registration payload in the registry's agent API format

use serde::{Deserialize, Serialize};

use crate::config::{RegistryConfig, ServiceConfig};

/// One service instance as announced to the registry.
///
/// Built once at startup and handed to the registry, which owns the
/// authoritative copy afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRegistration {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Port")]
    pub port: u16,
    #[serde(rename = "Check")]
    pub check: HealthCheck,
}

/// HTTP health check the registry polls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(rename = "HTTP")]
    pub http: String,
    #[serde(rename = "Interval")]
    pub interval: String,
    #[serde(rename = "Timeout")]
    pub timeout: String,
}

impl ServiceRegistration {
    pub fn from_config(service: &ServiceConfig, registry: &RegistryConfig) -> Self {
        Self {
            id: service.instance_id().to_string(),
            name: service.name.clone(),
            address: service.advertise_address.clone(),
            port: service.port,
            check: HealthCheck {
                http: service.health_check_url(),
                interval: registry.check_interval.clone(),
                timeout: registry.check_timeout.clone(),
            },
        }
    }
}
