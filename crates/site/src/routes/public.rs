//! Handlers for the public marketing page.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use digitalpro_core::models::contact::CreateContact;
use digitalpro_core::models::subscriber::CreateSubscriber;
use digitalpro_core::validation::validate_required;
use serde::Deserialize;

use super::loaded;
use crate::api_client::ApiClient;
use crate::state::SiteState;
use crate::views::public::{PublicSiteView, ENTER_EMAIL, FILL_ALL_FIELDS};
use crate::views::{notice_from_query, Notice};

pub fn router() -> Router<SiteState> {
    Router::new()
        .route("/", get(index))
        .route("/contact", post(submit_contact))
        .route("/subscribe", post(subscribe))
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    notice: Option<String>,
}

/// Fetch projects and clients concurrently; either may fail on its own.
async fn load_view(api: &ApiClient) -> PublicSiteView {
    let (projects, clients) = tokio::join!(api.list_projects(), api.list_clients());
    PublicSiteView {
        projects: loaded("projects", projects),
        clients: loaded("clients", clients),
        ..Default::default()
    }
}

fn notice_location(notice: Notice) -> String {
    format!("/?notice={}", notice.as_str())
}

/// GET /
pub async fn index(
    State(state): State<SiteState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let mut view = load_view(&state.public_api).await;
    view.alert = notice_from_query(query.notice.as_deref()).map(|n| n.message().to_string());
    Html(view.render())
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<SiteState>,
    Form(input): Form<CreateContact>,
) -> Response {
    if validate_required(&input).is_err() {
        let mut view = load_view(&state.public_api).await;
        view.contact = input;
        view.alert = Some(FILL_ALL_FIELDS.to_string());
        return Html(view.render()).into_response();
    }

    match state.public_api.create_contact(&input).await {
        Ok(contact) => {
            tracing::info!(contact_id = %contact.id, "Contact submitted");
            Redirect::to(&notice_location(Notice::ContactSent)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Contact submission failed");
            let mut view = load_view(&state.public_api).await;
            view.contact = input;
            Html(view.render()).into_response()
        }
    }
}

/// POST /subscribe
pub async fn subscribe(
    State(state): State<SiteState>,
    Form(input): Form<CreateSubscriber>,
) -> Response {
    if validate_required(&input).is_err() {
        let mut view = load_view(&state.public_api).await;
        view.subscribe = input;
        view.alert = Some(ENTER_EMAIL.to_string());
        return Html(view.render()).into_response();
    }

    match state.public_api.create_subscriber(&input).await {
        Ok(subscriber) => {
            tracing::info!(subscriber_id = %subscriber.id, "Newsletter subscription");
            Redirect::to(&notice_location(Notice::Subscribed)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Newsletter subscription failed");
            let mut view = load_view(&state.public_api).await;
            view.subscribe = input;
            Html(view.render()).into_response()
        }
    }
}
