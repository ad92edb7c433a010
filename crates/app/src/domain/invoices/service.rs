//! Invoices service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    domain::invoices::{
        errors::InvoicesServiceError,
        models::{NewSoldInvoice, SoldInvoice, SoldLine},
    },
    store::{Collection, Document},
};

#[derive(Debug, Clone)]
struct SoldInvoiceData {
    table_name: String,
    items: Vec<SoldLine>,
    total_bill: u64,
    total_discount: u64,
}

/// In-memory sold-invoices service.
#[derive(Debug, Clone, Default)]
pub struct MemInvoicesService {
    invoices: Collection<SoldInvoiceData>,
}

impl MemInvoicesService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn into_invoice(document: Document<SoldInvoiceData>) -> SoldInvoice {
    SoldInvoice {
        id: document.id,
        table_name: document.data.table_name,
        items: document.data.items,
        total_bill: document.data.total_bill,
        total_discount: document.data.total_discount,
        created_at: document.created_at,
    }
}

#[async_trait]
impl InvoicesService for MemInvoicesService {
    async fn list_invoices(&self) -> Result<Vec<SoldInvoice>, InvoicesServiceError> {
        Ok(self
            .invoices
            .list()
            .await
            .into_iter()
            .map(into_invoice)
            .collect())
    }

    async fn get_invoice(&self, id: Uuid) -> Result<SoldInvoice, InvoicesServiceError> {
        self.invoices
            .get(id)
            .await
            .map(into_invoice)
            .ok_or(InvoicesServiceError::NotFound)
    }

    async fn create_invoice(
        &self,
        invoice: NewSoldInvoice,
    ) -> Result<SoldInvoice, InvoicesServiceError> {
        if invoice.table_name.trim().is_empty() {
            return Err(InvoicesServiceError::MissingTableName);
        }

        if invoice.items.is_empty() {
            return Err(InvoicesServiceError::EmptyItems);
        }

        let document = self
            .invoices
            .insert(SoldInvoiceData {
                table_name: invoice.table_name,
                items: invoice.items,
                total_bill: invoice.total_bill,
                total_discount: invoice.total_discount,
            })
            .await;

        Ok(into_invoice(document))
    }
}

#[automock]
#[async_trait]
pub trait InvoicesService: Send + Sync {
    /// Lists sold invoices in sell order.
    async fn list_invoices(&self) -> Result<Vec<SoldInvoice>, InvoicesServiceError>;

    /// Retrieves one sold invoice.
    async fn get_invoice(&self, id: Uuid) -> Result<SoldInvoice, InvoicesServiceError>;

    /// Appends a sold invoice, assigning its id.
    async fn create_invoice(
        &self,
        invoice: NewSoldInvoice,
    ) -> Result<SoldInvoice, InvoicesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn new_invoice(table_name: &str) -> NewSoldInvoice {
        NewSoldInvoice {
            table_name: table_name.to_string(),
            items: vec![SoldLine {
                item_id: "m-1".to_string(),
                item_name: "beef-burger".to_string(),
                unit_price: 250,
                quantity: 2,
            }],
            total_bill: 500,
            total_discount: 50,
        }
    }

    #[tokio::test]
    async fn create_invoice_assigns_an_id() -> TestResult {
        let service = MemInvoicesService::new();

        let invoice = service.create_invoice(new_invoice("table-3")).await?;

        let fetched = service.get_invoice(invoice.id).await?;

        assert_eq!(fetched.table_name, "table-3");
        assert_eq!(fetched.total_bill, 500);
        assert_eq!(fetched.total_discount, 50);

        Ok(())
    }

    #[tokio::test]
    async fn invoices_are_immutable_copies() -> TestResult {
        let service = MemInvoicesService::new();

        let mut candidate = new_invoice("table-3");
        let invoice = service.create_invoice(candidate.clone()).await?;

        // Mutating the caller's candidate afterwards must not reach the store.
        candidate.total_bill = 0;

        let fetched = service.get_invoice(invoice.id).await?;
        assert_eq!(fetched.total_bill, 500);

        Ok(())
    }

    #[tokio::test]
    async fn empty_items_are_rejected() {
        let service = MemInvoicesService::new();

        let mut invoice = new_invoice("table-3");
        invoice.items.clear();

        let result = service.create_invoice(invoice).await;

        assert_eq!(result, Err(InvoicesServiceError::EmptyItems));
    }

    #[tokio::test]
    async fn blank_table_name_is_rejected() {
        let service = MemInvoicesService::new();

        let mut invoice = new_invoice("table-3");
        invoice.table_name = "  ".to_string();

        let result = service.create_invoice(invoice).await;

        assert_eq!(result, Err(InvoicesServiceError::MissingTableName));
    }

    #[tokio::test]
    async fn unknown_invoice_returns_not_found() {
        let service = MemInvoicesService::new();

        let result = service.get_invoice(Uuid::now_v7()).await;

        assert_eq!(result, Err(InvoicesServiceError::NotFound));
    }

    #[tokio::test]
    async fn list_returns_invoices_in_sell_order() -> TestResult {
        let service = MemInvoicesService::new();

        service.create_invoice(new_invoice("table-1")).await?;
        service.create_invoice(new_invoice("table-2")).await?;

        let tables: Vec<String> = service
            .list_invoices()
            .await?
            .into_iter()
            .map(|invoice| invoice.table_name)
            .collect();

        assert_eq!(tables, vec!["table-1", "table-2"]);

        Ok(())
    }
}
