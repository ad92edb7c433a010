//! Table Errors

use salvo::http::StatusError;

use tablebill_app::domain::tables::TablesServiceError;

pub(crate) fn into_status_error(error: TablesServiceError) -> StatusError {
    match error {
        TablesServiceError::NotFound => StatusError::not_found().brief("Table not found"),
    }
}
