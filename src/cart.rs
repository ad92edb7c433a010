//! Cart state machine
//!
//! A [`CartState`] holds every open order line across all tables. Transitions are a closed
//! set of [`CartAction`]s applied to an immutable snapshot, each returning a new snapshot;
//! nothing mutates a state in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::MenuItem;

/// Errors raised by cart transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The menu item carried an empty identifier.
    #[error("menu item is missing an identifier")]
    MissingItemId,

    /// The menu item carried an empty name.
    #[error("menu item is missing a name")]
    MissingItemName,

    /// The target table name was empty.
    #[error("table name is empty")]
    MissingTableName,
}

/// One order line: a menu item with an accumulated quantity, scoped to a table.
///
/// For a given `(item_id, table_name)` pair there is at most one line in a
/// [`CartState`]; repeated adds increment `quantity` instead of duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog identifier of the item.
    pub item_id: String,

    /// Slugged item name.
    pub item_name: String,

    /// Price per unit in minor currency units.
    pub unit_price: u64,

    /// Number of units ordered.
    pub quantity: u32,

    /// Table this line belongs to.
    pub table_name: String,

    /// Transient strike-through mark used while reviewing a draft invoice.
    /// Never persisted.
    #[serde(skip)]
    pub marked_for_removal: bool,
}

impl CartLine {
    /// Line total in minor currency units, if representable.
    pub fn line_total(&self) -> Option<u64> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }
}

/// The closed set of cart transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of `item` to `table_name`, merging with an existing line.
    AddItem {
        /// Item being ordered.
        item: MenuItem,
        /// Table receiving the item.
        table_name: String,
    },

    /// Delete the line matching `(item_id, table_name)`; a no-op when absent.
    RemoveLine {
        /// Catalog identifier of the line to delete.
        item_id: String,
        /// Table the line belongs to.
        table_name: String,
    },

    /// Drop every line belonging to `table_name`.
    ClearTable {
        /// Table whose lines are dropped.
        table_name: String,
    },

    /// Drop every line for every table.
    ClearAll,
}

/// Immutable snapshot of all open order lines, across every table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one transition, returning the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when an [`CartAction::AddItem`] payload fails
    /// its precondition (empty item id, item name, or table name).
    pub fn apply(&self, action: CartAction) -> Result<CartState, CartError> {
        match action {
            CartAction::AddItem { item, table_name } => self.add_item(item, table_name),
            CartAction::RemoveLine {
                item_id,
                table_name,
            } => Ok(self.remove_line(&item_id, &table_name)),
            CartAction::ClearTable { table_name } => Ok(self.clear_table(&table_name)),
            CartAction::ClearAll => Ok(self.clear_all()),
        }
    }

    /// Adds one unit of `item` to `table_name`.
    ///
    /// An existing `(item_id, table_name)` line gains one unit (saturating at
    /// the quantity ceiling); otherwise a new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the item id, item name, or table name is empty.
    pub fn add_item(
        &self,
        item: MenuItem,
        table_name: impl Into<String>,
    ) -> Result<CartState, CartError> {
        let table_name = table_name.into();

        if item.id.is_empty() {
            return Err(CartError::MissingItemId);
        }
        if item.name.is_empty() {
            return Err(CartError::MissingItemName);
        }
        if table_name.is_empty() {
            return Err(CartError::MissingTableName);
        }

        let mut lines = self.lines.clone();

        if let Some(line) = lines
            .iter_mut()
            .find(|line| line.item_id == item.id && line.table_name == table_name)
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            lines.push(CartLine {
                item_id: item.id,
                item_name: item.name,
                unit_price: item.unit_price,
                quantity: 1,
                table_name,
                marked_for_removal: false,
            });
        }

        Ok(CartState { lines })
    }

    /// Deletes the line matching `(item_id, table_name)`. Lines for the same
    /// item on other tables are untouched; a missing line is a no-op.
    pub fn remove_line(&self, item_id: &str, table_name: &str) -> CartState {
        let lines = self
            .lines
            .iter()
            .filter(|line| !(line.item_id == item_id && line.table_name == table_name))
            .cloned()
            .collect();

        CartState { lines }
    }

    /// Drops every line belonging to `table_name`.
    pub fn clear_table(&self, table_name: &str) -> CartState {
        let lines = self
            .lines
            .iter()
            .filter(|line| line.table_name != table_name)
            .cloned()
            .collect();

        CartState { lines }
    }

    /// Drops every line for every table.
    pub fn clear_all(&self) -> CartState {
        CartState::new()
    }

    /// Flips the transient removal mark on the `(item_id, table_name)` line.
    pub fn toggle_removal_mark(&self, item_id: &str, table_name: &str) -> CartState {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                if line.item_id == item_id && line.table_name == table_name {
                    let mut line = line.clone();
                    line.marked_for_removal = !line.marked_for_removal;
                    line
                } else {
                    line.clone()
                }
            })
            .collect();

        CartState { lines }
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Restartable view over the lines belonging to `table_name`.
    pub fn lines_for_table<'a>(
        &'a self,
        table_name: &'a str,
    ) -> impl Iterator<Item = &'a CartLine> {
        self.lines
            .iter()
            .filter(move |line| line.table_name == table_name)
    }

    /// Sum of quantities over `table_name`'s lines.
    pub fn total_quantity_for_table(&self, table_name: &str) -> u64 {
        self.lines_for_table(table_name)
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Number of lines across all tables.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no table has any open line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
