//! Sold Invoice Models

use jiff::Timestamp;
use uuid::Uuid;

/// One line of a sold invoice: a point-in-time copy of a cart line. Later
/// catalog edits never reach back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldLine {
    pub item_id: String,
    pub item_name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

/// Sold Invoice Model: the sale of record.
#[derive(Debug, Clone, PartialEq)]
pub struct SoldInvoice {
    pub id: Uuid,
    pub table_name: String,
    pub items: Vec<SoldLine>,
    /// Bill total in minor units at sell time.
    pub total_bill: u64,
    /// Absolute discount in minor units at sell time.
    pub total_discount: u64,
    pub created_at: Timestamp,
}

/// New Sold Invoice Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSoldInvoice {
    pub table_name: String,
    pub items: Vec<SoldLine>,
    pub total_bill: u64,
    pub total_discount: u64,
}
