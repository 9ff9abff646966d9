//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use digitalpro_core::models::project::{CreateProject, Project};

use super::parse_id;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<Json<Project>> {
    let project = state.store.create_project(&input).await?;
    tracing::info!(project_id = %project.id, "Project created");
    Ok(Json(project))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects().await?;
    Ok(Json(projects))
}

/// DELETE /projects/{id}
///
/// Responds `null` when no project has the id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Project>>> {
    let id = parse_id(&id)?;
    let deleted = state.store.delete_project(id).await?;
    tracing::info!(project_id = %id, found = deleted.is_some(), "Project delete");
    Ok(Json(deleted))
}
