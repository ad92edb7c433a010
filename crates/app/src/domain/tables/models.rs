//! Table Models

use jiff::Timestamp;
use uuid::Uuid;

/// Dining Table Model
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: Uuid,
    pub name: String,
    pub created_at: Timestamp,
}
