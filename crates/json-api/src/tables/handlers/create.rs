//! Create Table Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, tables::index::TableResponse};

/// Table Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TableCreatedResponse {
    /// Confirmation message
    pub message: String,

    /// The created table
    pub table: TableResponse,
}

/// Create Table Handler
///
/// Adds the next auto-named dining table.
#[endpoint(
    tags("tables"),
    summary = "Add Table",
    responses(
        (status_code = StatusCode::CREATED, description = "Table added"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TableCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let table = state
        .app
        .tables
        .create_table()
        .await
        .or_500("failed to add table")?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(TableCreatedResponse {
        message: "Table added successfully".to_string(),
        table: table.into(),
    }))
}
