//! Catalog Errors

use salvo::http::StatusError;

use tablebill_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Item name already exists")
        }
        CatalogServiceError::NotFound => StatusError::not_found().brief("Item not found"),
        CatalogServiceError::MissingName => StatusError::bad_request().brief("Item name is required"),
    }
}
