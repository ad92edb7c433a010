//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tablebill_app::{
    context::AppContext,
    domain::{
        catalog::MockCatalogService, invoices::MockInvoicesService, members::MockMembersService,
        tables::MockTablesService, users::MockUsersService,
    },
};

use crate::state::State;

fn strict_tables_mock() -> MockTablesService {
    let mut tables = MockTablesService::new();

    tables.expect_list_tables().never();
    tables.expect_create_table().never();
    tables.expect_delete_table().never();

    tables
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_items().never();
    catalog.expect_create_item().never();
    catalog.expect_delete_item().never();

    catalog
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_create_user().never();
    users.expect_delete_user().never();

    users
}

fn strict_members_mock() -> MockMembersService {
    let mut members = MockMembersService::new();

    members.expect_list_members().never();
    members.expect_find_member().never();
    members.expect_create_member().never();
    members.expect_delete_member().never();

    members
}

fn strict_invoices_mock() -> MockInvoicesService {
    let mut invoices = MockInvoicesService::new();

    invoices.expect_list_invoices().never();
    invoices.expect_get_invoice().never();
    invoices.expect_create_invoice().never();

    invoices
}

fn service_with(context: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(context))))
            .push(route),
    )
}

pub(crate) fn tables_service(tables: MockTablesService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(tables),
            Arc::new(strict_catalog_mock()),
            Arc::new(strict_users_mock()),
            Arc::new(strict_members_mock()),
            Arc::new(strict_invoices_mock()),
        ),
        route,
    )
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(strict_tables_mock()),
            Arc::new(catalog),
            Arc::new(strict_users_mock()),
            Arc::new(strict_members_mock()),
            Arc::new(strict_invoices_mock()),
        ),
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(strict_tables_mock()),
            Arc::new(strict_catalog_mock()),
            Arc::new(users),
            Arc::new(strict_members_mock()),
            Arc::new(strict_invoices_mock()),
        ),
        route,
    )
}

pub(crate) fn members_service(members: MockMembersService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(strict_tables_mock()),
            Arc::new(strict_catalog_mock()),
            Arc::new(strict_users_mock()),
            Arc::new(members),
            Arc::new(strict_invoices_mock()),
        ),
        route,
    )
}

pub(crate) fn invoices_service(invoices: MockInvoicesService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(strict_tables_mock()),
            Arc::new(strict_catalog_mock()),
            Arc::new(strict_users_mock()),
            Arc::new(strict_members_mock()),
            Arc::new(invoices),
        ),
        route,
    )
}
