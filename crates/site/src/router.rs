//! Site router builder, shared by `main.rs` and the integration tests.

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;
use crate::state::SiteState;

/// Build the full site [`Router`] with tracing and panic recovery.
pub fn build_site_router(state: SiteState) -> Router {
    Router::new()
        .merge(routes::site_routes())
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
