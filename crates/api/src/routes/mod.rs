pub mod clients;
pub mod contacts;
pub mod health;
pub mod projects;
pub mod subscribers;

use axum::Router;

use crate::state::AppState;

/// Build the record route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /projects              list, create
/// /projects/{id}         delete
///
/// /clients               list, create
/// /clients/{id}          delete
///
/// /contacts              list, create
///
/// /subs                  list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/clients", clients::router())
        .nest("/contacts", contacts::router())
        .nest("/subs", subscribers::router())
}
