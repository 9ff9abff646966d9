//! Handlers for the `/contacts` resource (create and list only).

use axum::extract::State;
use axum::Json;
use digitalpro_core::models::contact::{Contact, CreateContact};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /contacts
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContact>,
) -> AppResult<Json<Contact>> {
    let contact = state.store.create_contact(&input).await?;
    tracing::info!(contact_id = %contact.id, "Contact submission stored");
    Ok(Json(contact))
}

/// GET /contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    Ok(Json(state.store.list_contacts().await?))
}
