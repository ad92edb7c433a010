//! Discounts
//!
//! Membership discounts arrive as whole percentages (0-100) from the member
//! lookup; the arithmetic runs through decimals and rounds half-away-from-zero
//! back to minor units.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The membership discount percentage was outside 0-100.
    #[error("discount percentage {0} is outside the 0-100 range")]
    PercentOutOfRange(u8),

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// The ephemeral result of a membership lookup: a percentage plus whether the
/// lookup actually resolved to a member.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiscountQuote {
    percent: Percentage,
    resolved: bool,
}

impl DiscountQuote {
    /// The zero quote: no membership resolved, no discount.
    pub fn unresolved() -> Self {
        Self {
            percent: Percentage::from(Decimal::ZERO),
            resolved: false,
        }
    }

    /// A quote for a resolved membership carrying a whole-number percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentOutOfRange`] for percentages above 100.
    pub fn resolved(percent: u8) -> Result<Self, DiscountError> {
        if percent > 100 {
            return Err(DiscountError::PercentOutOfRange(percent));
        }

        Ok(Self {
            percent: Percentage::from(Decimal::new(i64::from(percent), 2)),
            resolved: true,
        })
    }

    /// Whether the lookup resolved to a member.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The discount percentage carried by this quote.
    pub fn percent(&self) -> Percentage {
        self.percent
    }
}

impl Default for DiscountQuote {
    fn default() -> Self {
        Self::unresolved()
    }
}

/// Calculates `percent` of a minor-unit amount, rounded half-away-from-zero.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] when the calculation overflows
/// or cannot be represented back in minor units.
pub fn percent_of_minor(percent: &Percentage, minor: u64) -> Result<u64, DiscountError> {
    let minor = Decimal::from_u64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // the percentage crate does not expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or(DiscountError::PercentConversion)
}

/// The absolute discount owed on a bill total: `total × percent` for a
/// resolved quote, zero otherwise. Pure.
///
/// # Errors
///
/// Returns a [`DiscountError`] when the percentage arithmetic fails.
pub fn apply_discount(total_minor: u64, quote: &DiscountQuote) -> Result<u64, DiscountError> {
    if !quote.is_resolved() {
        return Ok(0);
    }

    percent_of_minor(&quote.percent(), total_minor)
}
