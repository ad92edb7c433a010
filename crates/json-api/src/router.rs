//! App Router

use salvo::Router;

use crate::{catalog, invoices, members, tables, users};

/// Builds the `/api` route tree.
///
/// The catalog routes use a `{category}` segment parameter and are registered
/// last, so the fixed resource names always win the match.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("tables").get(tables::index::handler))
        .push(Router::with_path("add-table").post(tables::create::handler))
        .push(Router::with_path("delete-table/{name}").delete(tables::delete::handler))
        .push(Router::with_path("get-users").get(users::index::handler))
        .push(Router::with_path("add-user").post(users::create::handler))
        .push(Router::with_path("delete-user/{id}").delete(users::delete::handler))
        .push(Router::with_path("get-members").get(members::index::handler))
        .push(Router::with_path("add-member").post(members::create::handler))
        .push(Router::with_path("delete-member/{id}").delete(members::delete::handler))
        .push(Router::with_path("get-sold-invoices").get(invoices::index::handler))
        .push(Router::with_path("post-sold-invoices").post(invoices::create::handler))
        .push(Router::with_path("get-{category}").get(catalog::index::handler))
        .push(Router::with_path("add-{category}").post(catalog::create::handler))
        .push(Router::with_path("delete-{category}/{id}").delete(catalog::delete::handler))
}
