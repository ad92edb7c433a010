//! Tables

pub mod errors;
pub mod models;
pub mod service;

pub use errors::TablesServiceError;
pub use service::*;
