//! In-memory order table
//!
//! Owned by the order service and shared with handlers through `Arc`.
//! Every access is one atomic step under the lock: a single insert or a
//! single full snapshot.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::model::{Order, OrderStatus};

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never leave the map half-updated, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Order>> {
        self.orders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Order>> {
        self.orders.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create and store a `received` order under a fresh id
    pub fn create(&self, item_ids: Vec<String>) -> Order {
        let mut orders = self.write();
        loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = orders.entry(id) {
                let order = Order {
                    id: slot.key().clone(),
                    item_ids,
                    status: OrderStatus::Received,
                };
                slot.insert(order.clone());
                return order;
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.read().get(id).cloned()
    }

    /// Copy of the whole table
    pub fn snapshot(&self) -> HashMap<String, Order> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_assigns_id_and_status() {
        let store = OrderStore::new();
        let order = store.create(vec!["1".to_string(), "2".to_string()]);

        assert!(Uuid::parse_str(&order.id).is_ok());
        assert_eq!(order.status, OrderStatus::Received);
        assert_eq!(store.get(&order.id), Some(order));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = OrderStore::new();
        store.create(vec!["1".to_string()]);
        let snapshot = store.snapshot();

        store.create(vec!["2".to_string()]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_concurrent_creates_keep_every_entry() {
        let store = Arc::new(OrderStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..250)
                        .map(|i| store.create(vec![format!("{}-{}", t, i)]).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 2000);
        assert_eq!(store.len(), 2000);
        let snapshot = store.snapshot();
        assert!(ids.iter().all(|id| snapshot.contains_key(id)));
    }
}
