use axum::extract::State;
use axum::Json;
use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /subs
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSubscriber>,
) -> AppResult<Json<Subscriber>> {
    let subscriber = state.store.create_subscriber(&input).await?;
    tracing::info!(subscriber_id = %subscriber.id, "Subscriber added");
    Ok(Json(subscriber))
}

/// GET /subs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subscriber>>> {
    Ok(Json(state.store.list_subscribers().await?))
}
