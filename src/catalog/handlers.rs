use std::sync::Arc;

use axum::extract::State;

use super::items::{Catalog, CatalogItem};
use crate::http::{ApiResult, ok};

/// List all catalog items
///
/// GET /items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items, stable order", body = [CatalogItem], content_type = "application/json")
    ),
    tag = "Catalog"
)]
pub async fn list_items(State(catalog): State<Arc<Catalog>>) -> ApiResult<Vec<CatalogItem>> {
    ok(catalog.items().to_vec())
}
