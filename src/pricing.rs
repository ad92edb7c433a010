//! Pricing
//!
//! Bill totals are computed in integer minor currency units with checked
//! arithmetic; money never passes through a float.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::cart::CartLine;

/// Errors related to bill totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalPriceError {
    /// A single line's `unit_price * quantity` exceeds the representable amount.
    #[error("line total for item {0} overflows the representable amount")]
    LineOverflow(String),

    /// The running bill total exceeds the representable amount.
    #[error("bill total overflows the representable amount")]
    TotalOverflow,
}

/// Sums `unit_price * quantity` over the given lines, exact to the minor unit.
///
/// An empty sequence totals zero.
///
/// # Errors
///
/// Returns a [`TotalPriceError`] when a line total or the running sum overflows.
pub fn total_minor<'a>(
    lines: impl IntoIterator<Item = &'a CartLine>,
) -> Result<u64, TotalPriceError> {
    lines.into_iter().try_fold(0_u64, |sum, line| {
        let line_total = line
            .line_total()
            .ok_or_else(|| TotalPriceError::LineOverflow(line.item_id.clone()))?;

        sum.checked_add(line_total)
            .ok_or(TotalPriceError::TotalOverflow)
    })
}

/// Renders a minor-unit amount for a receipt, e.g. `590` → `$5.90`.
///
/// # Errors
///
/// Returns [`TotalPriceError::TotalOverflow`] when the amount does not fit the
/// signed money representation.
pub fn format_minor(minor: u64, currency: &'static Currency) -> Result<String, TotalPriceError> {
    let minor = i64::try_from(minor).map_err(|_ignored| TotalPriceError::TotalOverflow)?;

    Ok(Money::from_minor(minor, currency).to_string())
}
