//! Order Service - business logic for order creation
//!
//! Handlers stay thin HTTP adapters: they hand the raw body here and map
//! [`OrderError`] onto a status code.

use thiserror::Error;
use validator::Validate;

use super::model::{CreateOrderRequest, Order};
use super::store::OrderStore;
use crate::discovery::{DiscoveryError, FOOD_CATALOG_SERVICE, ServiceResolver};

#[derive(Debug, Error)]
pub enum OrderError {
    /// Body is not a valid order request
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Body decoded but violates request constraints
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Catalog service could not be located
    #[error("Food catalog service not available")]
    DependencyUnavailable(#[source] DiscoveryError),
}

pub struct OrderService<'a> {
    store: &'a OrderStore,
    resolver: &'a dyn ServiceResolver,
}

impl<'a> OrderService<'a> {
    pub fn new(store: &'a OrderStore, resolver: &'a dyn ServiceResolver) -> Self {
        Self { store, resolver }
    }

    /// Decode, check the catalog dependency, then store.
    ///
    /// Nothing is written unless every step succeeds.
    pub async fn create_order(&self, body: &[u8]) -> Result<Order, OrderError> {
        let req: CreateOrderRequest = serde_json::from_slice(body)?;
        req.validate()?;

        let catalog_addr = self
            .resolver
            .resolve(FOOD_CATALOG_SERVICE)
            .await
            .map_err(OrderError::DependencyUnavailable)?;
        // Item ids are not checked against the catalog yet; only its
        // location is required.
        tracing::info!(
            catalog = %catalog_addr,
            "Found {} at {}. Would validate items here.",
            FOOD_CATALOG_SERVICE,
            catalog_addr
        );

        let order = self.store.create(req.item_ids);
        tracing::info!(order_id = %order.id, items = order.item_ids.len(), "Order received");
        Ok(order)
    }
}
