//! Handlers for the admin dashboard, mounted at `/admin`.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use digitalpro_core::models::client::CreateClient;
use digitalpro_core::models::project::CreateProject;
use digitalpro_core::types::DbId;
use digitalpro_core::validation::validate_required;
use serde::Deserialize;

use super::loaded;
use crate::api_client::ApiClient;
use crate::state::SiteState;
use crate::views::admin::{render_delete_confirmation, AdminPanelView, AdminTab, DeleteTarget};
use crate::views::public::FILL_ALL_FIELDS;
use crate::views::{notice_from_query, Notice};

pub fn router() -> Router<SiteState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/projects", post(create_project))
        .route("/clients", post(create_client))
        .route(
            "/projects/{id}/delete",
            get(confirm_delete_project).post(delete_project),
        )
        .route(
            "/clients/{id}/delete",
            get(confirm_delete_client).post(delete_client),
        )
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    tab: Option<String>,
    notice: Option<String>,
}

/// Fetch all four collections concurrently; each may fail on its own.
async fn load_view(api: &ApiClient, tab: AdminTab) -> AdminPanelView {
    let (projects, clients, contacts, subscribers) = tokio::join!(
        api.list_projects(),
        api.list_clients(),
        api.list_contacts(),
        api.list_subscribers(),
    );
    AdminPanelView {
        tab,
        projects: loaded("projects", projects),
        clients: loaded("clients", clients),
        contacts: loaded("contacts", contacts),
        subscribers: loaded("subscribers", subscribers),
        ..Default::default()
    }
}

fn tab_redirect(tab: AdminTab, notice: Option<Notice>) -> Redirect {
    let location = match notice {
        Some(notice) => format!("{}&notice={}", tab.href(), notice.as_str()),
        None => tab.href(),
    };
    Redirect::to(&location)
}

/// GET /admin
pub async fn dashboard(
    State(state): State<SiteState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let tab = AdminTab::from_query(query.tab.as_deref());
    let mut view = load_view(&state.admin_api, tab).await;
    view.alert = notice_from_query(query.notice.as_deref()).map(|n| n.message().to_string());
    Html(view.render())
}

/// POST /admin/projects
pub async fn create_project(
    State(state): State<SiteState>,
    Form(input): Form<CreateProject>,
) -> Response {
    let alert = match validate_required(&input) {
        Err(_) => Some(FILL_ALL_FIELDS.to_string()),
        Ok(()) => match state.admin_api.create_project(&input).await {
            Ok(project) => {
                tracing::info!(project_id = %project.id, "Project added from admin panel");
                return tab_redirect(AdminTab::Projects, Some(Notice::ProjectAdded))
                    .into_response();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Adding project failed");
                None
            }
        },
    };

    let mut view = load_view(&state.admin_api, AdminTab::Projects).await;
    view.project_form = input;
    view.alert = alert;
    Html(view.render()).into_response()
}

/// POST /admin/clients
pub async fn create_client(
    State(state): State<SiteState>,
    Form(input): Form<CreateClient>,
) -> Response {
    let alert = match validate_required(&input) {
        Err(_) => Some(FILL_ALL_FIELDS.to_string()),
        Ok(()) => match state.admin_api.create_client(&input).await {
            Ok(client) => {
                tracing::info!(client_id = %client.id, "Client added from admin panel");
                return tab_redirect(AdminTab::Clients, Some(Notice::ClientAdded))
                    .into_response();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Adding client failed");
                None
            }
        },
    };

    let mut view = load_view(&state.admin_api, AdminTab::Clients).await;
    view.client_form = input;
    view.alert = alert;
    Html(view.render()).into_response()
}

/// GET /admin/projects/{id}/delete
pub async fn confirm_delete_project(Path(id): Path<DbId>) -> Html<String> {
    Html(render_delete_confirmation(DeleteTarget::Project, id))
}

/// GET /admin/clients/{id}/delete
pub async fn confirm_delete_client(Path(id): Path<DbId>) -> Html<String> {
    Html(render_delete_confirmation(DeleteTarget::Client, id))
}

/// POST /admin/projects/{id}/delete
pub async fn delete_project(State(state): State<SiteState>, Path(id): Path<DbId>) -> Redirect {
    match state.admin_api.delete_project(id).await {
        Ok(deleted) => {
            tracing::info!(
                project_id = %id,
                found = deleted.is_some(),
                "Project deleted from admin panel"
            );
            tab_redirect(AdminTab::Projects, Some(Notice::ProjectDeleted))
        }
        Err(e) => {
            tracing::warn!(project_id = %id, error = %e, "Deleting project failed");
            tab_redirect(AdminTab::Projects, None)
        }
    }
}

/// POST /admin/clients/{id}/delete
pub async fn delete_client(State(state): State<SiteState>, Path(id): Path<DbId>) -> Redirect {
    match state.admin_api.delete_client(id).await {
        Ok(deleted) => {
            tracing::info!(
                client_id = %id,
                found = deleted.is_some(),
                "Client deleted from admin panel"
            );
            tab_redirect(AdminTab::Clients, Some(Notice::ClientDeleted))
        }
        Err(e) => {
            tracing::warn!(client_id = %id, error = %e, "Deleting client failed");
            tab_redirect(AdminTab::Clients, None)
        }
    }
}
