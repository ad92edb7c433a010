//! Delete Catalog Item Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    catalog::{errors::into_status_error, handlers::parse_category},
    extensions::*,
    state::State,
};

/// Item Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete Catalog Item Handler
#[endpoint(
    tags("catalog"),
    summary = "Delete Catalog Item",
    responses(
        (status_code = StatusCode::OK, description = "Item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ItemDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = parse_category(&category.into_inner())?;

    state
        .app
        .catalog
        .delete_item(category, id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ItemDeletedResponse {
        message: "Item deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use tablebill_app::domain::catalog::{
        CatalogServiceError, MockCatalogService, models::Category,
    };

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(
            catalog,
            Router::with_path("api/delete-{category}/{id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_item_success() -> TestResult {
        let id = Uuid::now_v7();

        let mut catalog = MockCatalogService::new();

        catalog
            .expect_delete_item()
            .once()
            .withf(move |category, item_id| {
                *category == Category::VegetablesRices && *item_id == id
            })
            .return_once(|_, _| Ok(()));

        catalog.expect_list_items().never();
        catalog.expect_create_item().never();

        let res = TestClient::delete(format!(
            "http://example.com/api/delete-vegetables-rices/{id}"
        ))
        .send(&make_service(catalog))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_invalid_id_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/api/delete-fast-food/123")
            .send(&make_service(MockCatalogService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_item_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_delete_item()
            .once()
            .return_once(|_, _| Err(CatalogServiceError::NotFound));

        catalog.expect_list_items().never();
        catalog.expect_create_item().never();

        let res = TestClient::delete(format!(
            "http://example.com/api/delete-fast-food/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(catalog))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
