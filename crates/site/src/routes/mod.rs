pub mod admin;
pub mod public;

use axum::Router;

use crate::error::ClientError;
use crate::state::SiteState;

/// Build the page route tree.
///
/// ```text
/// GET  /                                public site
/// POST /contact                         contact form
/// POST /subscribe                       newsletter form
///
/// GET  /admin?tab=..                    dashboard
/// POST /admin/projects                  add project
/// POST /admin/clients                   add client
/// GET  /admin/projects/{id}/delete      confirm page
/// POST /admin/projects/{id}/delete      delete
/// GET  /admin/clients/{id}/delete       confirm page
/// POST /admin/clients/{id}/delete       delete
/// ```
pub fn site_routes() -> Router<SiteState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}

/// Unwrap a list fetch, rendering a failure as an empty list.
pub(crate) fn loaded<T>(collection: &'static str, result: Result<Vec<T>, ClientError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(collection, error = %e, "Failed to fetch list");
            Vec::new()
        }
    }
}
