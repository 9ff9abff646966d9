//! One collection failing must not blank out the others.
//!
//! The site talks to a stand-in API where some list endpoints answer with
//! the real API's error body and the rest return data.

mod common;

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use common::{body_text, get as get_page, serve, site_app};
use digitalpro_api::error::AppError;
use digitalpro_core::models::client::Client;
use digitalpro_core::models::contact::Contact;
use digitalpro_core::models::project::Project;
use digitalpro_core::models::subscriber::Subscriber;
use digitalpro_core::types::new_id;

fn project() -> Project {
    Project {
        id: new_id(),
        name: "Portfolio Site".into(),
        description: "A site".into(),
        image: "http://img/p.png".into(),
        created_at: Utc::now(),
    }
}

fn client() -> Client {
    Client {
        id: new_id(),
        name: "Jane Doe".into(),
        description: "Great to work with".into(),
        designation: "CEO".into(),
        image: "http://img/c.png".into(),
        created_at: Utc::now(),
    }
}

fn subscriber() -> Subscriber {
    Subscriber {
        id: new_id(),
        email: "a@b.com".into(),
        created_at: Utc::now(),
    }
}

async fn store_offline() -> AppError {
    AppError::BadRequest("store offline".into())
}

/// Projects and subscribers succeed; clients and contacts fail.
async fn half_broken_api() -> String {
    let api = Router::new()
        .route("/projects", get(|| async { Json(vec![project()]) }))
        .route("/clients", get(store_offline))
        .route("/contacts", get(store_offline))
        .route("/subs", get(|| async { Json(vec![subscriber()]) }));
    serve(api).await
}

/// The mirror image: projects fail, clients succeed.
async fn projects_down_api() -> String {
    let api = Router::new()
        .route("/projects", get(store_offline))
        .route("/clients", get(|| async { Json(vec![client()]) }))
        .route("/contacts", get(|| async { Json(Vec::<Contact>::new()) }))
        .route("/subs", get(store_offline));
    serve(api).await
}

// ---------------------------------------------------------------------------
// Public site
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_clients_fetch_keeps_projects() {
    let app = site_app(&half_broken_api().await);
    let html = body_text(get_page(app, "/").await).await;

    assert!(html.contains("<h3>Portfolio Site</h3>"));
    assert!(!html.contains("No projects yet"));
    assert!(html.contains("No clients yet"));
}

#[tokio::test]
async fn failed_projects_fetch_keeps_clients() {
    let app = site_app(&projects_down_api().await);
    let html = body_text(get_page(app, "/").await).await;

    assert!(html.contains("No projects yet"));
    assert!(html.contains("<h4>Jane Doe</h4>"));
    assert!(!html.contains("No clients yet"));
}

// ---------------------------------------------------------------------------
// Admin panel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_tabs_load_independently() {
    let app = site_app(&half_broken_api().await);

    let html = body_text(get_page(app.clone(), "/admin?tab=projects").await).await;
    assert!(html.contains("All Projects (1)"));
    assert!(html.contains("<strong>Portfolio Site</strong>"));

    let html = body_text(get_page(app.clone(), "/admin?tab=clients").await).await;
    assert!(html.contains("All Clients (0)"));
    assert!(html.contains("No clients added yet"));

    let html = body_text(get_page(app.clone(), "/admin?tab=contacts").await).await;
    assert!(html.contains("No contact submissions yet"));

    let html = body_text(get_page(app, "/admin?tab=subscribers").await).await;
    assert!(html.contains("Total Subscribers: 1"));
    assert!(html.contains("<td>a@b.com</td>"));
}

#[tokio::test]
async fn admin_clients_tab_survives_failed_projects_fetch() {
    let app = site_app(&projects_down_api().await);

    let html = body_text(get_page(app.clone(), "/admin?tab=projects").await).await;
    assert!(html.contains("No projects added yet"));

    let html = body_text(get_page(app, "/admin?tab=clients").await).await;
    assert!(html.contains("All Clients (1)"));
    assert!(html.contains("<strong>Jane Doe</strong>"));
}
