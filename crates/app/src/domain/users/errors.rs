//! Users service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsersServiceError {
    #[error("a user with this email already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("user email is empty")]
    MissingEmail,
}
