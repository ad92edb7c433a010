//! App Context

use std::sync::Arc;

use crate::domain::{
    catalog::{CatalogService, MemCatalogService},
    invoices::{InvoicesService, MemInvoicesService},
    members::{MembersService, MemMembersService},
    tables::{MemTablesService, TablesService},
    users::{MemUsersService, UsersService},
};

/// Shared handles to every collection service.
#[derive(Clone)]
pub struct AppContext {
    pub tables: Arc<dyn TablesService>,
    pub catalog: Arc<dyn CatalogService>,
    pub users: Arc<dyn UsersService>,
    pub members: Arc<dyn MembersService>,
    pub invoices: Arc<dyn InvoicesService>,
}

impl AppContext {
    /// Build an application context from explicit service handles.
    #[must_use]
    pub fn new(
        tables: Arc<dyn TablesService>,
        catalog: Arc<dyn CatalogService>,
        users: Arc<dyn UsersService>,
        members: Arc<dyn MembersService>,
        invoices: Arc<dyn InvoicesService>,
    ) -> Self {
        Self {
            tables,
            catalog,
            users,
            members,
            invoices,
        }
    }

    /// Build an application context over fresh in-memory collections.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemTablesService::new()),
            Arc::new(MemCatalogService::new()),
            Arc::new(MemUsersService::new()),
            Arc::new(MemMembersService::new()),
            Arc::new(MemInvoicesService::new()),
        )
    }
}
