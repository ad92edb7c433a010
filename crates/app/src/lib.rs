//! Shared application modules: the order-store collection services, the
//! client-resident cart engine, and the HTTP client binding them together.

pub mod client;
pub mod context;
pub mod domain;
pub mod engine;
pub mod store;
