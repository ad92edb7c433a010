//! Members service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembersServiceError {
    #[error("a member with this mobile number already exists")]
    AlreadyExists,

    #[error("member not found")]
    NotFound,

    #[error("member mobile number is empty")]
    MissingMobile,

    #[error("discount percentage {0} is outside the 0-100 range")]
    InvalidDiscount(u8),
}
