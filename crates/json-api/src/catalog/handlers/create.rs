//! Create Catalog Item Handler

use std::sync::Arc;

use salvo::{
    oapi::ToSchema,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tablebill_app::domain::catalog::models::NewCatalogItem;

use crate::{
    catalog::{errors::into_status_error, handlers::parse_category},
    extensions::*,
    state::State,
};

/// Create Catalog Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateItemRequest {
    /// Display name; stored normalized (whitespace → hyphens, lower-cased)
    pub item_name: String,

    /// Unit price in minor currency units
    pub item_price: u64,
}

impl From<CreateItemRequest> for NewCatalogItem {
    fn from(request: CreateItemRequest) -> Self {
        NewCatalogItem {
            name: request.item_name,
            unit_price: request.item_price,
        }
    }
}

/// Item Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemCreatedResponse {
    /// Confirmation message
    pub message: String,
}

/// Create Catalog Item Handler
#[endpoint(
    tags("catalog"),
    summary = "Add Catalog Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::CONFLICT, description = "Item name already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    json: JsonBody<CreateItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = parse_category(&category.into_inner())?;

    state
        .app
        .catalog
        .create_item(category, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ItemCreatedResponse {
        message: "Item added successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use tablebill_app::domain::catalog::{
        CatalogServiceError, MockCatalogService, models::Category,
    };

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(
            catalog,
            Router::with_path("api/add-{category}").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_item_success() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_create_item()
            .once()
            .withf(|category, item| {
                *category == Category::DrinksJuices
                    && *item
                        == NewCatalogItem {
                            name: "Iced  Tea".to_string(),
                            unit_price: 120,
                        }
            })
            .return_once(|category, item| {
                Ok(tablebill_app::domain::catalog::models::CatalogItem {
                    id: uuid::Uuid::now_v7(),
                    category,
                    name: tablebill::names::normalize(&item.name),
                    unit_price: item.unit_price,
                    created_at: jiff::Timestamp::UNIX_EPOCH,
                })
            });

        catalog.expect_list_items().never();
        catalog.expect_delete_item().never();

        let res = TestClient::post("http://example.com/api/add-drinks-juices")
            .json(&json!({ "item_name": "Iced  Tea", "item_price": 120 }))
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_item_returns_409() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_create_item()
            .once()
            .return_once(|_, _| Err(CatalogServiceError::AlreadyExists));

        catalog.expect_list_items().never();
        catalog.expect_delete_item().never();

        let res = TestClient::post("http://example.com/api/add-drinks-juices")
            .json(&json!({ "item_name": "iced tea", "item_price": 120 }))
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_blank_name_returns_400() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_create_item()
            .once()
            .return_once(|_, _| Err(CatalogServiceError::MissingName));

        catalog.expect_list_items().never();
        catalog.expect_delete_item().never();

        let res = TestClient::post("http://example.com/api/add-fast-food")
            .json(&json!({ "item_name": "   ", "item_price": 120 }))
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_in_unknown_category_returns_404() -> TestResult {
        let res = TestClient::post("http://example.com/api/add-desserts")
            .json(&json!({ "item_name": "cake", "item_price": 200 }))
            .send(&make_service(MockCatalogService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
