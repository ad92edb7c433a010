//! Delete Table Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, tables::errors::into_status_error};

/// Table Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TableDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete Table Handler
///
/// Deletes a dining table by name.
#[endpoint(
    tags("tables"),
    summary = "Delete Table",
    responses(
        (status_code = StatusCode::OK, description = "Table deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Table not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<TableDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .tables
        .delete_table(name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(TableDeletedResponse {
        message: "Table deleted successfully".to_string(),
    }))
}
