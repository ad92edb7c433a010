//! Tables service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TablesServiceError {
    #[error("table not found")]
    NotFound,
}
