//! Users Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablebill_app::domain::users::models::User;

use crate::{extensions::*, state::State};

/// User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub id: Uuid,

    /// The user's display name
    pub name: String,

    /// The user's email; unique per user
    pub email: String,

    /// The date and time the user was created
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at.to_string(),
        }
    }
}

/// Users Index Handler
///
/// Returns the list of staff users as a bare array.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .or_500("failed to fetch users")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
