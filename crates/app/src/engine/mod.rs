//! Cart engine
//!
//! The client-resident half of the system. The engine owns the in-memory
//! [`CartState`], persists a snapshot after every mutation, and carries the
//! membership quote for the next sale. All mutations happen on one logical
//! thread; the suspension points are the store calls and the snapshot write.

pub mod checkout;
pub mod discount;
pub mod snapshot;

pub use checkout::CheckoutError;

use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use tablebill::{
    cart::{CartError, CartLine, CartState},
    discounts::{DiscountError, DiscountQuote, apply_discount},
    items::MenuItem,
    pricing::{TotalPriceError, total_minor},
};

use crate::{
    client::OrderStore,
    engine::{
        discount::{DiscountResolver, LookupOutcome},
        snapshot::{SnapshotError, SnapshotStore},
    },
};

/// Errors surfaced by engine mutations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Pricing(#[from] TotalPriceError),

    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// The table-side cart engine.
#[derive(Debug)]
pub struct CartEngine {
    state: CartState,
    snapshot: SnapshotStore,
    resolver: DiscountResolver,
}

impl CartEngine {
    /// Rehydrates the engine from the snapshot store.
    pub async fn load(snapshot: SnapshotStore) -> Self {
        let state = snapshot.load().await;

        Self {
            state,
            snapshot,
            resolver: DiscountResolver::default(),
        }
    }

    /// The current cart snapshot.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// The quote from the newest completed membership lookup.
    #[must_use]
    pub fn quote(&self) -> &DiscountQuote {
        self.resolver.quote()
    }

    /// Adds one unit of `item` to `table_name` and persists the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the item fails its precondition or the
    /// snapshot write fails.
    pub async fn add_item(&mut self, item: MenuItem, table_name: &str) -> Result<(), EngineError> {
        self.state = self.state.add_item(item, table_name)?;
        self.snapshot.save(&self.state).await?;

        Ok(())
    }

    /// Removes the `(item_id, table_name)` line and persists the snapshot.
    ///
    /// Returns whether the whole cross-table cart is now empty, so callers
    /// can reset their view state.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the snapshot write fails.
    pub async fn remove_line(
        &mut self,
        item_id: &str,
        table_name: &str,
    ) -> Result<bool, EngineError> {
        self.state = self.state.remove_line(item_id, table_name);
        self.snapshot.save(&self.state).await?;

        Ok(self.state.is_empty())
    }

    /// Voids every open line across all tables and persists the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the snapshot write fails.
    pub async fn clear_all(&mut self) -> Result<(), EngineError> {
        self.state = self.state.clear_all();
        self.snapshot.save(&self.state).await?;

        Ok(())
    }

    /// Flips the transient strike-through mark on a line. In-memory only;
    /// marks are never persisted.
    pub fn toggle_removal_mark(&mut self, item_id: &str, table_name: &str) {
        self.state = self.state.toggle_removal_mark(item_id, table_name);
    }

    /// Restartable view over a table's lines.
    pub fn lines_for_table<'a>(
        &'a self,
        table_name: &'a str,
    ) -> impl Iterator<Item = &'a CartLine> {
        self.state.lines_for_table(table_name)
    }

    /// The table's bill total in minor units.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the total overflows.
    pub fn table_total(&self, table_name: &str) -> Result<u64, EngineError> {
        Ok(total_minor(self.state.lines_for_table(table_name))?)
    }

    /// The absolute discount owed on the table's bill under the current quote.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the total or the percentage arithmetic
    /// fails.
    pub fn table_discount(&self, table_name: &str) -> Result<u64, EngineError> {
        let total = self.table_total(table_name)?;

        Ok(apply_discount(total, self.resolver.quote())?)
    }

    /// Runs one membership lookup and updates the quote, unless a newer
    /// lookup was issued while this one was in flight. Any failure or miss
    /// resets the quote to unresolved.
    ///
    /// Returns whether a discount is resolved after the call.
    pub async fn lookup_membership(&mut self, store: &dyn OrderStore, mobile: &str) -> bool {
        let ticket = self.resolver.begin();

        let outcome = match store.find_member(mobile.to_string()).await {
            Ok(Some(member)) => LookupOutcome::Member {
                discount_percent: member.discount_percent,
            },
            Ok(None) => LookupOutcome::NoMember,
            Err(lookup_error) => {
                warn!("membership lookup failed: {lookup_error}");

                LookupOutcome::Failed
            }
        };

        self.resolver.complete(ticket, outcome);

        self.resolver.quote().is_resolved()
    }

    /// Clears a settled table and resets the quote. The store already holds
    /// the sale of record; a failed snapshot write must not mask the id.
    pub(crate) async fn settle_table(&mut self, table_name: &str, invoice_id: Uuid) {
        self.state = self.state.clear_table(table_name);
        self.resolver.reset();

        if let Err(write_error) = self.snapshot.save(&self.state).await {
            error!(
                "cart snapshot write failed after invoice {invoice_id} was recorded: {write_error}"
            );
        }
    }
}
