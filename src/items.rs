//! Menu items

/// A catalog item as the cart references it: a stable identifier, a slugged
/// name, and a unit price in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable catalog identifier.
    pub id: String,

    /// Slugged item name (see [`crate::names`]).
    pub name: String,

    /// Price per unit in minor currency units.
    pub unit_price: u64,
}

impl MenuItem {
    /// Creates a new menu item reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}
