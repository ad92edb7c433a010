//! Checkout transition
//!
//! Finalizing a table packages its lines into an invoice candidate and
//! submits it to the order store. Success clears exactly that table's lines;
//! failure leaves the cart untouched for a manual resubmit. There is no
//! automatic retry.

use thiserror::Error;
use uuid::Uuid;

use tablebill::{
    discounts::{DiscountError, apply_discount},
    pricing::{TotalPriceError, total_minor},
};

use crate::{
    client::{InvoiceCandidate, OrderStore, OrderStoreError},
    domain::invoices::models::SoldLine,
    engine::CartEngine,
};

/// Errors from the checkout transition.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The table has no open lines; nothing to sell.
    #[error("table {0} has no lines to sell")]
    EmptyCart(String),

    #[error(transparent)]
    Pricing(#[from] TotalPriceError),

    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Submission failed; the cart is unchanged.
    #[error("order store rejected the invoice")]
    Store(#[from] OrderStoreError),
}

impl CartEngine {
    /// Submits `table_name`'s cart as a sold invoice and returns the
    /// store-assigned id.
    ///
    /// Callers must obtain explicit confirmation first: once submitted, the
    /// store holds the only copy of the transaction.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] when the table is empty, the arithmetic
    /// fails, or the store rejects the submission. On any error the cart
    /// state is exactly what it was before the call.
    pub async fn finalize(
        &mut self,
        store: &dyn OrderStore,
        table_name: &str,
    ) -> Result<Uuid, CheckoutError> {
        let items: Vec<SoldLine> = self
            .state()
            .lines_for_table(table_name)
            .map(|line| SoldLine {
                item_id: line.item_id.clone(),
                item_name: line.item_name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
            })
            .collect();

        if items.is_empty() {
            return Err(CheckoutError::EmptyCart(table_name.to_string()));
        }

        let total_bill = total_minor(self.state().lines_for_table(table_name))?;
        let total_discount = apply_discount(total_bill, self.quote())?;

        let invoice_id = store
            .submit_invoice(InvoiceCandidate {
                table_name: table_name.to_string(),
                items,
                total_bill,
                total_discount,
            })
            .await?;

        self.settle_table(table_name, invoice_id).await;

        Ok(invoice_id)
    }
}
