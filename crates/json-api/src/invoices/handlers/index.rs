//! Invoices Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablebill_app::domain::invoices::models::{SoldInvoice, SoldLine};

use crate::{extensions::*, state::State};

/// Sold Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SoldLineResponse {
    /// Catalog identifier of the sold item
    pub item_id: String,

    /// Slugged item name at sell time
    pub item_name: String,

    /// Unit price in minor currency units at sell time
    pub unit_price: u64,

    /// Number of units sold
    pub quantity: u32,
}

impl From<SoldLine> for SoldLineResponse {
    fn from(line: SoldLine) -> Self {
        Self {
            item_id: line.item_id,
            item_name: line.item_name,
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// Sold Invoice Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvoiceResponse {
    /// The unique identifier of the invoice
    pub id: Uuid,

    /// The table the order was sold for
    pub table_name: String,

    /// The sold lines, as captured at sell time
    pub items: Vec<SoldLineResponse>,

    /// Bill total in minor currency units
    pub total_bill: u64,

    /// Absolute discount in minor currency units
    pub total_discount: u64,

    /// The date and time the sale was recorded
    pub created_at: String,
}

impl From<SoldInvoice> for InvoiceResponse {
    fn from(invoice: SoldInvoice) -> Self {
        Self {
            id: invoice.id,
            table_name: invoice.table_name,
            items: invoice.items.into_iter().map(Into::into).collect(),
            total_bill: invoice.total_bill,
            total_discount: invoice.total_discount,
            created_at: invoice.created_at.to_string(),
        }
    }
}

/// Invoices Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvoicesResponse {
    /// The sell history, in sell order
    pub invoices: Vec<InvoiceResponse>,
}

/// Invoices Index Handler
///
/// Returns the sell history.
#[endpoint(tags("invoices"), summary = "List Sold Invoices")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<InvoicesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let invoices = state
        .app
        .invoices
        .list_invoices()
        .await
        .or_500("failed to fetch sold invoices")?;

    Ok(Json(InvoicesResponse {
        invoices: invoices.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tablebill_app::domain::invoices::MockInvoicesService;

    use crate::test_helpers::invoices_service;

    use super::*;

    fn make_invoice(table_name: &str) -> SoldInvoice {
        SoldInvoice {
            id: Uuid::now_v7(),
            table_name: table_name.to_string(),
            items: vec![SoldLine {
                item_id: "m-1".to_string(),
                item_name: "beef-burger".to_string(),
                unit_price: 250,
                quantity: 2,
            }],
            total_bill: 500,
            total_discount: 50,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(invoices: MockInvoicesService) -> Service {
        invoices_service(
            invoices,
            Router::with_path("api/get-sold-invoices").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_the_sell_history() -> TestResult {
        let mut invoices = MockInvoicesService::new();

        invoices
            .expect_list_invoices()
            .once()
            .return_once(|| Ok(vec![make_invoice("table-3")]));

        invoices.expect_get_invoice().never();
        invoices.expect_create_invoice().never();

        let response: InvoicesResponse = TestClient::get("http://example.com/api/get-sold-invoices")
            .send(&make_service(invoices))
            .await
            .take_json()
            .await?;

        assert_eq!(response.invoices.len(), 1);

        let Some(invoice) = response.invoices.first() else {
            panic!("expected one invoice");
        };
        assert_eq!(invoice.table_name, "table-3");
        assert_eq!(invoice.total_bill, 500);
        assert_eq!(invoice.items.len(), 1);

        Ok(())
    }
}
