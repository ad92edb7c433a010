//! Member Errors

use salvo::http::StatusError;

use tablebill_app::domain::members::MembersServiceError;

pub(crate) fn into_status_error(error: MembersServiceError) -> StatusError {
    match error {
        MembersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Member with this mobile number already exists")
        }
        MembersServiceError::NotFound => StatusError::not_found().brief("No membership found"),
        MembersServiceError::MissingMobile => {
            StatusError::bad_request().brief("Member mobile number is required")
        }
        MembersServiceError::InvalidDiscount(_) => {
            StatusError::bad_request().brief("Discount percentage must be between 0 and 100")
        }
    }
}
