//! Student Cafe - food catalog and order microservices
//!
//! Each service registers itself with a Consul-compatible registry at
//! startup (best effort, never blocking the listener), and the order
//! service locates the catalog service through a pluggable resolver before
//! accepting a write.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`registry`] - self-registration and health queries
//! - [`discovery`] - static and registry-backed service resolvers
//! - [`http`] - shared handlers, middleware and error responses
//! - [`catalog`] - food catalog service
//! - [`order`] - order service

pub mod config;
pub mod logging;

pub mod discovery;
pub mod registry;

pub mod catalog;
pub mod http;
pub mod order;

// Convenient re-exports at crate root
pub use catalog::{Catalog, CatalogItem};
pub use config::{AppConfig, ConfigError, DiscoveryMode, ServiceConfig};
pub use discovery::{DiscoveryError, RegistryResolver, ServiceResolver, StaticResolver};
pub use order::{Order, OrderStatus, OrderStore};
pub use registry::{RegistrationError, RegistryClient, ServiceRegistration};
