//! Member Models

use jiff::Timestamp;
use uuid::Uuid;

/// Member Model
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    /// Whole-number discount percentage, 0-100.
    pub discount_percent: u8,
    pub created_at: Timestamp,
}

/// New Member Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub mobile: String,
    pub discount_percent: u8,
}
