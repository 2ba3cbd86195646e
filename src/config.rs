use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub catalog: ServiceConfig,
    pub order: ServiceConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Identity and listener of one service instance
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Logical service name announced to the registry
    pub name: String,
    /// Instance id; defaults to the service name
    #[serde(default)]
    pub id: Option<String>,
    /// Bind host
    pub host: String,
    pub port: u16,
    /// Address the registry and peers use to reach this instance
    pub advertise_address: String,
}

impl ServiceConfig {
    pub fn instance_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn health_check_url(&self) -> String {
        format!("http://{}:{}/health", self.advertise_address, self.port)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegistryConfig {
    pub enabled: bool,
    /// Registry base URL, e.g. `http://consul:8500`
    pub address: String,
    /// Health check poll interval, in registry duration syntax
    pub check_interval: String,
    pub check_timeout: String,
    /// Upper bound for a single registry HTTP call
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            address: "http://consul:8500".to_string(),
            check_interval: "10s".to_string(),
            check_timeout: "1s".to_string(),
            timeout_ms: 2000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    #[default]
    Static,
    Registry,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub mode: DiscoveryMode,
    /// Fixed name -> base URL table used in `static` mode
    #[serde(default)]
    pub services: HashMap<String, String>,
    /// Upper bound for one resolution in `registry` mode
    pub timeout_ms: u64,
    /// How long healthy instances are reused before asking the registry again (0 = never)
    #[serde(default)]
    pub cache_ttl_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        let mut services = HashMap::new();
        services.insert(
            "food-catalog-service".to_string(),
            "http://food-catalog-service:8080".to_string(),
        );
        Self {
            mode: DiscoveryMode::Static,
            services,
            timeout_ms: 2000,
            cache_ttl_ms: 0,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
log_level: "info"
log_dir: "./logs"
log_file: "cafe.log"
use_json: false
rotation: "never"
catalog:
  name: "food-catalog-service"
  host: "0.0.0.0"
  port: 8080
  advertise_address: "food-catalog-service"
order:
  name: "order-service"
  id: "order-service-1"
  host: "0.0.0.0"
  port: 8081
  advertise_address: "order-service"
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();

        assert_eq!(config.catalog.instance_id(), "food-catalog-service");
        assert_eq!(config.order.instance_id(), "order-service-1");
        assert!(config.registry.enabled);
        assert_eq!(config.registry.check_interval, "10s");
        assert_eq!(config.discovery.mode, DiscoveryMode::Static);
        assert_eq!(
            config.discovery.services.get("food-catalog-service").map(String::as_str),
            Some("http://food-catalog-service:8080")
        );
    }

    #[test]
    fn test_health_check_url_uses_advertised_address() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(
            config.catalog.health_check_url(),
            "http://food-catalog-service:8080/health"
        );
        assert_eq!(config.order.bind_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_registry_discovery_mode() {
        let yaml = format!(
            "{}\ndiscovery:\n  mode: registry\n  timeout_ms: 500\n  cache_ttl_ms: 3000\n",
            MINIMAL
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();

        assert_eq!(config.discovery.mode, DiscoveryMode::Registry);
        assert_eq!(config.discovery.timeout_ms, 500);
        assert!(config.discovery.services.is_empty());
    }

    #[test]
    fn test_shipped_configs_parse() {
        let dev = AppConfig::load("dev").unwrap();
        assert_eq!(dev.catalog.port, 8080);
        assert_eq!(dev.order.port, 8081);
        assert_eq!(dev.discovery.mode, DiscoveryMode::Static);

        let consul = AppConfig::load("consul").unwrap();
        assert_eq!(consul.discovery.mode, DiscoveryMode::Registry);

        let local = AppConfig::load("local").unwrap();
        assert!(!local.registry.enabled);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load("does-not-exist").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
