//! Order types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Order lifecycle status.
///
/// Only `Received` is produced today; the rest are reserved for
/// fulfilment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Received,
    Processing,
    Fulfilled,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Server-assigned, unique for the process lifetime
    #[schema(example = "4f1c2a9e-8a4b-4c3e-9a43-2b7d0b5f6c11")]
    pub id: String,
    #[schema(example = json!(["1", "2"]))]
    pub item_ids: Vec<String>,
    pub status: OrderStatus,
}

/// POST /orders body. Any client-sent `id`/`status` is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "item_ids must not be empty"))]
    #[schema(example = json!(["1", "2"]))]
    pub item_ids: Vec<String>,
}
