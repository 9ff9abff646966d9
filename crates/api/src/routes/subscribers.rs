use axum::routing::get;
use axum::Router;

use crate::handlers::subscriber;
use crate::state::AppState;

/// Routes mounted at `/subs`. There is no delete route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(subscriber::list).post(subscriber::create))
}
