use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contacts`. There is no delete route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contact::list).post(contact::create))
}
