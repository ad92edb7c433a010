//! Membership discount resolution
//!
//! Lookups are correlated by a monotonically increasing sequence number. Only
//! the newest issued lookup may update the quote; responses to superseded
//! tickets are discarded, so a re-submitted number can never be overwritten
//! by a stale reply.

use tracing::warn;

use tablebill::discounts::DiscountQuote;

/// Correlates one in-flight membership lookup with its completion.
#[derive(Debug)]
pub struct LookupTicket {
    seq: u64,
}

/// Outcome of a completed lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The store returned a membership with its discount percentage.
    Member {
        /// Whole-number discount percentage from the membership record.
        discount_percent: u8,
    },

    /// No membership matched the number.
    NoMember,

    /// The request failed in transit.
    Failed,
}

/// Tracks the newest lookup and the quote it produced.
#[derive(Debug, Default)]
pub struct DiscountResolver {
    issued: u64,
    quote: DiscountQuote,
}

impl DiscountResolver {
    /// Registers a new lookup, superseding any still in flight.
    pub fn begin(&mut self) -> LookupTicket {
        self.issued += 1;

        LookupTicket { seq: self.issued }
    }

    /// Applies a completed lookup unless a newer one was issued meanwhile.
    /// Returns whether the outcome was applied.
    pub fn complete(&mut self, ticket: LookupTicket, outcome: LookupOutcome) -> bool {
        if ticket.seq != self.issued {
            return false;
        }

        self.quote = match outcome {
            LookupOutcome::Member { discount_percent } => {
                DiscountQuote::resolved(discount_percent).unwrap_or_else(|error| {
                    warn!("discarding invalid membership discount: {error}");

                    DiscountQuote::unresolved()
                })
            }
            LookupOutcome::NoMember | LookupOutcome::Failed => DiscountQuote::unresolved(),
        };

        true
    }

    /// The quote from the newest completed lookup.
    #[must_use]
    pub fn quote(&self) -> &DiscountQuote {
        &self.quote
    }

    /// Drops any resolved quote.
    pub fn reset(&mut self) {
        self.quote = DiscountQuote::unresolved();
    }
}
