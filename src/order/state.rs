use std::sync::Arc;

use crate::discovery::ServiceResolver;

use super::store::OrderStore;

/// Order service state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Order table
    pub orders: Arc<OrderStore>,
    /// Locates the catalog service before a write
    pub resolver: Arc<dyn ServiceResolver>,
}

impl AppState {
    pub fn new(orders: Arc<OrderStore>, resolver: Arc<dyn ServiceResolver>) -> Self {
        Self { orders, resolver }
    }
}
