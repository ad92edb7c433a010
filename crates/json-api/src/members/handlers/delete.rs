//! Delete Member Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, members::errors::into_status_error, state::State};

/// Member Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MemberDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete Member Handler
#[endpoint(
    tags("members"),
    summary = "Delete Member",
    responses(
        (status_code = StatusCode::OK, description = "Member deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Member not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid member id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MemberDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .members
        .delete_member(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MemberDeletedResponse {
        message: "Member deleted successfully".to_string(),
    }))
}
