use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A menu item. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    /// Unique within the catalog
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Coffee")]
    pub name: String,
    /// Non-negative, encoded as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 2.5)]
    pub price: Decimal,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, price: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// Read-only item list served by the catalog service
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Fixed menu: Coffee, Sandwich, Muffin
    pub fn seeded() -> Self {
        Self {
            items: vec![
                CatalogItem::new("1", "Coffee", Decimal::new(250, 2)),
                CatalogItem::new("2", "Sandwich", Decimal::new(500, 2)),
                CatalogItem::new("3", "Muffin", Decimal::new(325, 2)),
            ],
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
