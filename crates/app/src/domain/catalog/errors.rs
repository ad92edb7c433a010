//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("an item with this name already exists in the category")]
    AlreadyExists,

    #[error("catalog item not found")]
    NotFound,

    #[error("item name is empty after normalization")]
    MissingName,
}
