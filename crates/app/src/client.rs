//! Order store client
//!
//! The cart engine depends on the narrow [`OrderStore`] trait (membership
//! lookup + invoice submission); [`HttpOrderStore`] implements it over the
//! JSON API and adds the maintenance calls the terminal needs.

use async_trait::async_trait;
use mockall::automock;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{catalog::models::Category, invoices::models::SoldLine};

/// Errors from order store requests.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("request to the order store failed")]
    Transport(#[from] reqwest::Error),

    #[error("order store rejected the request with status {0}")]
    Rejected(StatusCode),
}

/// A membership as returned by the member lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub mobile: String,
    pub discount_percent: u8,
}

/// The invoice payload submitted at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceCandidate {
    pub table_name: String,
    pub items: Vec<SoldLine>,
    pub total_bill: u64,
    pub total_discount: u64,
}

/// The order-store calls the cart engine makes.
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Looks up a membership by mobile number; `Ok(None)` when none exists.
    async fn find_member(&self, mobile: String) -> Result<Option<MemberProfile>, OrderStoreError>;

    /// Submits a finalized invoice, returning the store-assigned id.
    async fn submit_invoice(&self, invoice: InvoiceCandidate) -> Result<Uuid, OrderStoreError>;
}

/// A dining table as listed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTable {
    pub id: Uuid,
    pub name: String,
}

/// A catalog item as listed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteItem {
    pub id: Uuid,
    pub item_name: String,
    pub item_price: u64,
}

/// A sold invoice as listed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteInvoice {
    pub id: Uuid,
    pub table_name: String,
    pub total_bill: u64,
    pub total_discount: u64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
struct TablesEnvelope {
    tables: Vec<RemoteTable>,
}

#[derive(Debug, Deserialize)]
struct TableEnvelope {
    table: RemoteTable,
}

#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    items: Vec<RemoteItem>,
}

#[derive(Debug, Deserialize)]
struct MemberEnvelope {
    member: MemberProfile,
}

#[derive(Debug, Deserialize)]
struct MembersEnvelope {
    members: Vec<MemberProfile>,
}

#[derive(Debug, Deserialize)]
struct InvoicesEnvelope {
    invoices: Vec<RemoteInvoice>,
}

#[derive(Debug, Deserialize)]
struct InsertedEnvelope {
    #[serde(rename = "insertedId")]
    inserted_id: Uuid,
}

#[derive(Debug, Serialize)]
struct NewItemBody<'a> {
    item_name: &'a str,
    item_price: u64,
}

#[derive(Debug, Serialize)]
struct NewUserBody<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct NewMemberBody<'a> {
    name: &'a str,
    mobile: &'a str,
    discount_percent: u8,
}

#[derive(Debug, Serialize)]
struct SoldLineBody<'a> {
    item_id: &'a str,
    item_name: &'a str,
    unit_price: u64,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct NewInvoiceBody<'a> {
    table_name: &'a str,
    items: Vec<SoldLineBody<'a>>,
    total_bill: u64,
    total_discount: u64,
}

/// reqwest-backed client for the order-store JSON API.
#[derive(Debug, Clone)]
pub struct HttpOrderStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOrderStore {
    /// Creates a client rooted at the API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, OrderStoreError> {
        let response = self.http.get(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderStoreError::Rejected(status));
        }

        Ok(response.json().await?)
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, OrderStoreError> {
        let status = response.status();

        if !status.is_success() {
            return Err(OrderStoreError::Rejected(status));
        }

        Ok(response)
    }

    /// Lists dining tables.
    pub async fn list_tables(&self) -> Result<Vec<RemoteTable>, OrderStoreError> {
        Ok(self.get_json::<TablesEnvelope>("/api/tables").await?.tables)
    }

    /// Adds the next auto-named table.
    pub async fn add_table(&self) -> Result<RemoteTable, OrderStoreError> {
        let response = self.http.post(self.url("/api/add-table")).send().await?;
        let response = Self::expect_success(response).await?;

        Ok(response.json::<TableEnvelope>().await?.table)
    }

    /// Deletes a table by name.
    pub async fn delete_table(&self, name: &str) -> Result<(), OrderStoreError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/delete-table/{name}")))
            .send()
            .await?;

        Self::expect_success(response).await?;

        Ok(())
    }

    /// Lists a category's items, alphabetically.
    pub async fn list_items(&self, category: Category) -> Result<Vec<RemoteItem>, OrderStoreError> {
        Ok(self
            .get_json::<ItemsEnvelope>(&format!("/api/get-{}", category.as_slug()))
            .await?
            .items)
    }

    /// Adds a catalog item to a category.
    pub async fn add_item(
        &self,
        category: Category,
        name: &str,
        unit_price: u64,
    ) -> Result<(), OrderStoreError> {
        let response = self
            .http
            .post(self.url(&format!("/api/add-{}", category.as_slug())))
            .json(&NewItemBody {
                item_name: name,
                item_price: unit_price,
            })
            .send()
            .await?;

        Self::expect_success(response).await?;

        Ok(())
    }

    /// Deletes a catalog item from a category.
    pub async fn delete_item(&self, category: Category, id: Uuid) -> Result<(), OrderStoreError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/delete-{}/{id}", category.as_slug())))
            .send()
            .await?;

        Self::expect_success(response).await?;

        Ok(())
    }

    /// Registers a staff user.
    pub async fn add_user(&self, name: &str, email: &str) -> Result<(), OrderStoreError> {
        let response = self
            .http
            .post(self.url("/api/add-user"))
            .json(&NewUserBody { name, email })
            .send()
            .await?;

        Self::expect_success(response).await?;

        Ok(())
    }

    /// Lists registered members.
    pub async fn list_members(&self) -> Result<Vec<MemberProfile>, OrderStoreError> {
        Ok(self
            .get_json::<MembersEnvelope>("/api/get-members")
            .await?
            .members)
    }

    /// Registers a member.
    pub async fn add_member(
        &self,
        name: &str,
        mobile: &str,
        discount_percent: u8,
    ) -> Result<(), OrderStoreError> {
        let response = self
            .http
            .post(self.url("/api/add-member"))
            .json(&NewMemberBody {
                name,
                mobile,
                discount_percent,
            })
            .send()
            .await?;

        Self::expect_success(response).await?;

        Ok(())
    }

    /// Lists the sell history.
    pub async fn list_invoices(&self) -> Result<Vec<RemoteInvoice>, OrderStoreError> {
        Ok(self
            .get_json::<InvoicesEnvelope>("/api/get-sold-invoices")
            .await?
            .invoices)
    }
}

#[async_trait]
impl OrderStore for HttpOrderStore {
    async fn find_member(&self, mobile: String) -> Result<Option<MemberProfile>, OrderStoreError> {
        let response = self
            .http
            .get(self.url("/api/get-members"))
            .query(&[("search", mobile.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::expect_success(response).await?;

        Ok(Some(response.json::<MemberEnvelope>().await?.member))
    }

    async fn submit_invoice(&self, invoice: InvoiceCandidate) -> Result<Uuid, OrderStoreError> {
        let body = NewInvoiceBody {
            table_name: &invoice.table_name,
            items: invoice
                .items
                .iter()
                .map(|line| SoldLineBody {
                    item_id: &line.item_id,
                    item_name: &line.item_name,
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                })
                .collect(),
            total_bill: invoice.total_bill,
            total_discount: invoice.total_discount,
        };

        let response = self
            .http
            .post(self.url("/api/post-sold-invoices"))
            .json(&body)
            .send()
            .await?;

        let response = Self::expect_success(response).await?;

        Ok(response.json::<InsertedEnvelope>().await?.inserted_id)
    }
}
