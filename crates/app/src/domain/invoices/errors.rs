//! Invoices service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoicesServiceError {
    #[error("sold invoice not found")]
    NotFound,

    #[error("invoice table name is empty")]
    MissingTableName,

    #[error("invoice has no items")]
    EmptyItems,
}
