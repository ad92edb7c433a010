//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// User Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete User Handler
#[endpoint(
    tags("users"),
    summary = "Delete User",
    responses(
        (status_code = StatusCode::OK, description = "User deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid user id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .users
        .delete_user(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(UserDeletedResponse {
        message: "User deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use tablebill_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::users_service;

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(
            users,
            Router::with_path("api/delete-user/{id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_user_success() -> TestResult {
        let id = Uuid::now_v7();

        let mut users = MockUsersService::new();

        users
            .expect_delete_user()
            .once()
            .withf(move |user_id| *user_id == id)
            .return_once(|_| Ok(()));

        users.expect_list_users().never();
        users.expect_create_user().never();

        let res = TestClient::delete(format!("http://example.com/api/delete-user/{id}"))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_user_returns_404() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_delete_user()
            .once()
            .return_once(|_| Err(UsersServiceError::NotFound));

        users.expect_list_users().never();
        users.expect_create_user().never();

        let res = TestClient::delete(format!(
            "http://example.com/api/delete-user/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(users))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
