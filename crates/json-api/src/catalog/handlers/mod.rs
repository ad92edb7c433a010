pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

use salvo::prelude::StatusError;

use tablebill_app::domain::catalog::models::Category;

/// Resolves the `{category}` path segment to a known menu category; any other
/// slug is an unknown resource.
fn parse_category(slug: &str) -> Result<Category, StatusError> {
    slug.parse()
        .map_err(|_ignored| StatusError::not_found().brief("Unknown menu category"))
}
