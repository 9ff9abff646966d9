//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::Json;
use digitalpro_core::models::client::{Client, CreateClient};

use super::parse_id;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /clients
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateClient>,
) -> AppResult<Json<Client>> {
    let client = state.store.create_client(&input).await?;
    tracing::info!(client_id = %client.id, "Client created");
    Ok(Json(client))
}

/// GET /clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.store.list_clients().await?;
    Ok(Json(clients))
}

/// DELETE /clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Client>>> {
    let id = parse_id(&id)?;
    let deleted = state.store.delete_client(id).await?;
    tracing::info!(client_id = %id, found = deleted.is_some(), "Client delete");
    Ok(Json(deleted))
}
