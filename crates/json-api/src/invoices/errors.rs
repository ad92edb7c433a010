//! Invoice Errors

use salvo::http::StatusError;

use tablebill_app::domain::invoices::InvoicesServiceError;

pub(crate) fn into_status_error(error: InvoicesServiceError) -> StatusError {
    match error {
        InvoicesServiceError::NotFound => StatusError::not_found().brief("Invoice not found"),
        InvoicesServiceError::MissingTableName => {
            StatusError::bad_request().brief("Invoice table name is required")
        }
        InvoicesServiceError::EmptyItems => {
            StatusError::bad_request().brief("Invoice has no items")
        }
    }
}
