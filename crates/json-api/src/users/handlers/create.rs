//! Create User Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use tablebill_app::domain::users::models::NewUser;

use crate::{extensions::*, state::State, users::errors::into_status_error, users::index::UserResponse};

/// Create User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    /// The user's display name
    pub name: String,

    /// The user's email; unique per user
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
        }
    }
}

/// User Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserCreatedResponse {
    /// Confirmation message
    pub message: String,

    /// The created user
    pub user: UserResponse,
}

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Add User",
    responses(
        (status_code = StatusCode::CREATED, description = "User added"),
        (status_code = StatusCode::CONFLICT, description = "User with this email already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .create_user(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(UserCreatedResponse {
        message: "User added successfully".to_string(),
        user: user.into(),
    }))
}
