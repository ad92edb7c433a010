//! User Errors

use salvo::http::StatusError;

use tablebill_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("User with this email already exists")
        }
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::MissingEmail => StatusError::bad_request().brief("User email is required"),
    }
}
