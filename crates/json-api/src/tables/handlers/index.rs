//! Tables Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablebill_app::domain::tables::models::Table;

use crate::{extensions::*, state::State};

/// Table Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TableResponse {
    /// The unique identifier of the table
    pub id: Uuid,

    /// The table name, e.g. `table-3`
    pub name: String,

    /// The date and time the table was created
    pub created_at: String,
}

impl From<Table> for TableResponse {
    fn from(table: Table) -> Self {
        Self {
            id: table.id,
            name: table.name,
            created_at: table.created_at.to_string(),
        }
    }
}

/// Tables Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TablesResponse {
    /// The dining tables
    pub tables: Vec<TableResponse>,
}

/// Tables Index Handler
///
/// Returns the list of dining tables.
#[endpoint(tags("tables"), summary = "List Tables")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TablesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tables = state
        .app
        .tables
        .list_tables()
        .await
        .or_500("failed to fetch tables")?;

    Ok(Json(TablesResponse {
        tables: tables.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tablebill_app::domain::tables::MockTablesService;

    use crate::test_helpers::tables_service;

    use super::*;

    fn make_table(name: &str) -> Table {
        Table {
            id: Uuid::now_v7(),
            name: name.to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(tables: MockTablesService) -> Service {
        tables_service(tables, Router::with_path("api/tables").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_tables() -> TestResult {
        let mut tables = MockTablesService::new();

        tables
            .expect_list_tables()
            .once()
            .return_once(|| Ok(vec![make_table("table-1"), make_table("table-2")]));

        tables.expect_create_table().never();
        tables.expect_delete_table().never();

        let response: TablesResponse = TestClient::get("http://example.com/api/tables")
            .send(&make_service(tables))
            .await
            .take_json()
            .await?;

        let names: Vec<&str> = response
            .tables
            .iter()
            .map(|table| table.name.as_str())
            .collect();

        assert_eq!(names, vec!["table-1", "table-2"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut tables = MockTablesService::new();

        tables.expect_list_tables().once().return_once(|| Ok(vec![]));
        tables.expect_create_table().never();
        tables.expect_delete_table().never();

        let response: TablesResponse = TestClient::get("http://example.com/api/tables")
            .send(&make_service(tables))
            .await
            .take_json()
            .await?;

        assert!(response.tables.is_empty());

        Ok(())
    }
}
