//! Memberships

pub mod errors;
pub mod models;
pub mod service;

pub use errors::MembersServiceError;
pub use service::*;
