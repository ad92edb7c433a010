//! Create Sold Invoice Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablebill_app::domain::invoices::models::{NewSoldInvoice, SoldLine};

use crate::{extensions::*, invoices::errors::into_status_error, state::State};

/// Sold Line Body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SoldLineBody {
    /// Catalog identifier of the sold item
    pub item_id: String,

    /// Slugged item name at sell time
    pub item_name: String,

    /// Unit price in minor currency units at sell time
    pub unit_price: u64,

    /// Number of units sold
    pub quantity: u32,
}

impl From<SoldLineBody> for SoldLine {
    fn from(line: SoldLineBody) -> Self {
        Self {
            item_id: line.item_id,
            item_name: line.item_name,
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// Create Sold Invoice Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateInvoiceRequest {
    /// The table the order was sold for
    pub table_name: String,

    /// The sold lines, as captured at sell time
    pub items: Vec<SoldLineBody>,

    /// Bill total in minor currency units
    pub total_bill: u64,

    /// Absolute discount in minor currency units
    pub total_discount: u64,
}

impl From<CreateInvoiceRequest> for NewSoldInvoice {
    fn from(request: CreateInvoiceRequest) -> Self {
        NewSoldInvoice {
            table_name: request.table_name,
            items: request.items.into_iter().map(Into::into).collect(),
            total_bill: request.total_bill,
            total_discount: request.total_discount,
        }
    }
}

/// Invoice Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvoiceCreatedResponse {
    /// The store-assigned invoice id
    #[serde(rename = "insertedId")]
    pub inserted_id: Uuid,
}

/// Create Sold Invoice Handler
///
/// Records a finalized sale and returns the store-assigned id.
#[endpoint(
    tags("invoices"),
    summary = "Post Sold Invoice",
    responses(
        (status_code = StatusCode::CREATED, description = "Invoice recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateInvoiceRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<InvoiceCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let invoice = state
        .app
        .invoices
        .create_invoice(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(InvoiceCreatedResponse {
        inserted_id: invoice.id,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tablebill_app::domain::invoices::{
        InvoicesServiceError, MockInvoicesService, models::SoldInvoice,
    };

    use crate::test_helpers::invoices_service;

    use super::*;

    fn make_service(invoices: MockInvoicesService) -> Service {
        invoices_service(
            invoices,
            Router::with_path("api/post-sold-invoices").post(handler),
        )
    }

    fn request_body() -> serde_json::Value {
        json!({
            "table_name": "table-3",
            "items": [
                { "item_id": "m-1", "item_name": "beef-burger", "unit_price": 250, "quantity": 2 },
                { "item_id": "m-2", "item_name": "lemonade", "unit_price": 90, "quantity": 1 },
            ],
            "total_bill": 590,
            "total_discount": 59,
        })
    }

    #[tokio::test]
    async fn test_create_invoice_returns_the_inserted_id() -> TestResult {
        let id = Uuid::now_v7();

        let mut invoices = MockInvoicesService::new();

        invoices
            .expect_create_invoice()
            .once()
            .withf(|invoice| {
                invoice.table_name == "table-3"
                    && invoice.items.len() == 2
                    && invoice.total_bill == 590
                    && invoice.total_discount == 59
            })
            .return_once(move |invoice| {
                Ok(SoldInvoice {
                    id,
                    table_name: invoice.table_name,
                    items: invoice.items,
                    total_bill: invoice.total_bill,
                    total_discount: invoice.total_discount,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        invoices.expect_list_invoices().never();
        invoices.expect_get_invoice().never();

        let mut res = TestClient::post("http://example.com/api/post-sold-invoices")
            .json(&request_body())
            .send(&make_service(invoices))
            .await;

        let body: InvoiceCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.inserted_id, id);

        Ok(())
    }

    #[tokio::test]
    async fn test_inserted_id_uses_the_wire_field_name() -> TestResult {
        let id = Uuid::now_v7();

        let mut invoices = MockInvoicesService::new();

        invoices.expect_create_invoice().once().return_once(move |invoice| {
            Ok(SoldInvoice {
                id,
                table_name: invoice.table_name,
                items: invoice.items,
                total_bill: invoice.total_bill,
                total_discount: invoice.total_discount,
                created_at: Timestamp::UNIX_EPOCH,
            })
        });

        invoices.expect_list_invoices().never();
        invoices.expect_get_invoice().never();

        let mut res = TestClient::post("http://example.com/api/post-sold-invoices")
            .json(&request_body())
            .send(&make_service(invoices))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body.get("insertedId"), Some(&json!(id.to_string())));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_invoice_with_no_items_returns_400() -> TestResult {
        let mut invoices = MockInvoicesService::new();

        invoices
            .expect_create_invoice()
            .once()
            .return_once(|_| Err(InvoicesServiceError::EmptyItems));

        invoices.expect_list_invoices().never();
        invoices.expect_get_invoice().never();

        let res = TestClient::post("http://example.com/api/post-sold-invoices")
            .json(&json!({
                "table_name": "table-3",
                "items": [],
                "total_bill": 0,
                "total_discount": 0,
            }))
            .send(&make_service(invoices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
