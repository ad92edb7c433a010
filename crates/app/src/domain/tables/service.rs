//! Tables service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::tables::{errors::TablesServiceError, models::Table},
    store::{Collection, Document},
};

#[derive(Debug, Clone)]
struct TableData {
    name: String,
}

/// In-memory tables service.
#[derive(Debug, Clone, Default)]
pub struct MemTablesService {
    tables: Collection<TableData>,
}

impl MemTablesService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn into_table(document: Document<TableData>) -> Table {
    Table {
        id: document.id,
        name: document.data.name,
        created_at: document.created_at,
    }
}

#[async_trait]
impl TablesService for MemTablesService {
    async fn list_tables(&self) -> Result<Vec<Table>, TablesServiceError> {
        Ok(self
            .tables
            .list()
            .await
            .into_iter()
            .map(into_table)
            .collect())
    }

    async fn create_table(&self) -> Result<Table, TablesServiceError> {
        // Auto-named from the live count, matching the floor's numbering.
        let name = format!("table-{}", self.tables.count().await + 1);

        let document = self.tables.insert(TableData { name }).await;

        Ok(into_table(document))
    }

    async fn delete_table(&self, name: String) -> Result<(), TablesServiceError> {
        let Some(document) = self.tables.find(|table| table.name == name).await else {
            return Err(TablesServiceError::NotFound);
        };

        if !self.tables.delete(document.id).await {
            return Err(TablesServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TablesService: Send + Sync {
    /// Lists tables in creation order.
    async fn list_tables(&self) -> Result<Vec<Table>, TablesServiceError>;

    /// Creates the next auto-named table.
    async fn create_table(&self) -> Result<Table, TablesServiceError>;

    /// Deletes a table by its name.
    async fn delete_table(&self, name: String) -> Result<(), TablesServiceError>;
}
