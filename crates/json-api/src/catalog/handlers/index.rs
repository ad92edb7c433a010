//! Catalog Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablebill_app::domain::catalog::models::CatalogItem;

use crate::{catalog::handlers::parse_category, extensions::*, state::State};

/// Catalog Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The unique identifier of the item
    pub id: Uuid,

    /// The stored item slug, e.g. `iced-tea`
    pub item_name: String,

    /// The unit price in minor currency units
    pub item_price: u64,

    /// The date and time the item was created
    pub created_at: String,
}

impl From<CatalogItem> for ItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            item_name: item.name,
            item_price: item.unit_price,
            created_at: item.created_at.to_string(),
        }
    }
}

/// Catalog Items Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemsResponse {
    /// Confirmation message
    pub message: String,

    /// The category's items, alphabetically by slug
    pub items: Vec<ItemResponse>,
}

/// Catalog Index Handler
///
/// Returns a category's items, alphabetically by slug.
#[endpoint(tags("catalog"), summary = "List Catalog Items")]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = parse_category(&category.into_inner())?;

    let items = state
        .app
        .catalog
        .list_items(category)
        .await
        .or_500("failed to fetch catalog items")?;

    Ok(Json(ItemsResponse {
        message: "Items retrieved successfully".to_string(),
        items: items.into_iter().map(Into::into).collect(),
    }))
}
