//! End-to-end page flows: the site router talking to a live API over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_text, dead_api_base, get, location, post_form, site_app, site_with_api};
use digitalpro_core::models::client::CreateClient;
use digitalpro_core::models::project::CreateProject;
use digitalpro_db::{MemoryStore, RecordStore};

const CONTACT_FORM: &str = "fullName=Ada+Lovelace&email=ada%40example.com&mobile=555-0100&city=London";

async fn seed_project(store: &MemoryStore, name: &str) -> String {
    store
        .create_project(&CreateProject {
            name: name.into(),
            description: "A site".into(),
            image: "http://img/p.png".into(),
        })
        .await
        .unwrap()
        .id
        .to_string()
}

async fn seed_client(store: &MemoryStore, name: &str) -> String {
    store
        .create_client(&CreateClient {
            name: name.into(),
            description: "Great to work with".into(),
            designation: "CEO".into(),
            image: "http://img/c.png".into(),
        })
        .await
        .unwrap()
        .id
        .to_string()
}

// ---------------------------------------------------------------------------
// Public site
// ---------------------------------------------------------------------------

#[tokio::test]
async fn public_page_shows_empty_states() {
    let (app, _) = site_with_api().await;
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("DigitalPro"));
    assert!(html.contains("Admin Panel"));
    assert!(html.contains("No projects yet"));
    assert!(html.contains("No clients yet"));
    assert!(html.contains("Get a Free Consultation"));
    assert!(html.contains("Subscribe to our Newsletter"));
}

#[tokio::test]
async fn public_page_lists_projects_and_clients() {
    let (app, store) = site_with_api().await;
    seed_project(&store, "Portfolio Site").await;
    seed_client(&store, "Jane Doe").await;

    let html = body_text(get(app, "/").await).await;
    assert!(html.contains("<h3>Portfolio Site</h3>"));
    assert!(html.contains("<h4>Jane Doe</h4>"));
    assert!(!html.contains("No projects yet"));
    assert!(!html.contains("No clients yet"));
}

#[tokio::test]
async fn blank_contact_field_alerts_without_calling_the_api() {
    let (app, store) = site_with_api().await;
    let response = post_form(app, "/contact", "fullName=Ada&email=&mobile=555&city=London").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Please fill all fields"));
    assert!(html.contains("name=\"fullName\" value=\"Ada\""));
    assert!(store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_submission_is_stored_and_confirmed() {
    let (app, store) = site_with_api().await;
    let response = post_form(app.clone(), "/contact", CONTACT_FORM).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?notice=contact-sent");

    let contacts = store.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].full_name, "Ada Lovelace");
    assert_eq!(contacts[0].email, "ada@example.com");

    let html = body_text(get(app, "/?notice=contact-sent").await).await;
    assert!(html.contains("Message Sent!"));
    assert!(html.contains("name=\"fullName\" value=\"\""));
}

#[tokio::test]
async fn blank_email_alerts_and_valid_email_subscribes() {
    let (app, store) = site_with_api().await;

    let html = body_text(post_form(app.clone(), "/subscribe", "email=").await).await;
    assert!(html.contains("Please enter an email"));
    assert!(store.list_subscribers().await.unwrap().is_empty());

    for _ in 0..2 {
        let response = post_form(app.clone(), "/subscribe", "email=a%40b.com").await;
        assert_eq!(location(&response), "/?notice=subscribed");
    }
    let subscribers = store.list_subscribers().await.unwrap();
    assert_eq!(subscribers.len(), 2);
    assert_ne!(subscribers[0].id, subscribers[1].id);

    let html = body_text(get(app, "/?notice=subscribed").await).await;
    assert!(html.contains("Subscribed!"));
}

#[tokio::test]
async fn unknown_notice_is_ignored() {
    let (app, _) = site_with_api().await;
    let html = body_text(get(app, "/?notice=hacked").await).await;
    assert!(!html.contains("<dialog"));
}

// ---------------------------------------------------------------------------
// Admin panel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_defaults_to_projects_tab() {
    let (app, _) = site_with_api().await;
    let html = body_text(get(app, "/admin").await).await;

    assert!(html.contains("Admin Dashboard"));
    assert!(html.contains("View Website"));
    assert!(html.contains("Project Management"));
    assert!(html.contains("All Projects (0)"));
    assert!(html.contains("No projects added yet"));
    assert!(!html.contains("Client Management"));
}

#[tokio::test]
async fn contacts_empty_state_only_on_contacts_tab() {
    let (app, _) = site_with_api().await;

    let html = body_text(get(app.clone(), "/admin?tab=contacts").await).await;
    assert!(html.contains("Contact Form Submissions"));
    assert!(html.contains("Total Contacts: 0"));
    assert!(html.contains("No contact submissions yet"));
    assert!(!html.contains("Project Management"));

    let html = body_text(get(app, "/admin?tab=projects").await).await;
    assert!(!html.contains("No contact submissions yet"));
}

#[tokio::test]
async fn subscribers_tab_lists_emails() {
    let (app, _) = site_with_api().await;
    post_form(app.clone(), "/subscribe", "email=a%40b.com").await;

    let html = body_text(get(app, "/admin?tab=subscribers").await).await;
    assert!(html.contains("Newsletter Subscribers"));
    assert!(html.contains("Total Subscribers: 1"));
    assert!(html.contains("<td>a@b.com</td>"));
}

#[tokio::test]
async fn adding_a_project_redirects_with_confirmation() {
    let (app, store) = site_with_api().await;
    let response = post_form(
        app.clone(),
        "/admin/projects",
        "name=Portfolio+Site&description=A+site&image=http%3A%2F%2Fimg%2Fp.png",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    assert_eq!(target, "/admin?tab=projects&notice=project-added");
    assert_eq!(store.list_projects().await.unwrap().len(), 1);

    let html = body_text(get(app, &target).await).await;
    assert!(html.contains("Project Added!"));
    assert!(html.contains("All Projects (1)"));
    assert!(html.contains("<strong>Portfolio Site</strong>"));
}

#[tokio::test]
async fn blank_client_field_keeps_values_and_alerts() {
    let (app, store) = site_with_api().await;
    let response = post_form(
        app,
        "/admin/clients",
        "name=Jane&description=Great&designation=&image=http%3A%2F%2Fimg",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Please fill all fields"));
    assert!(html.contains("Client Management"));
    assert!(html.contains("name=\"name\" value=\"Jane\""));
    assert!(store.list_clients().await.unwrap().is_empty());
}

#[tokio::test]
async fn adding_a_client_redirects_to_clients_tab() {
    let (app, store) = site_with_api().await;
    let response = post_form(
        app,
        "/admin/clients",
        "name=Jane&description=Great&designation=CEO&image=http%3A%2F%2Fimg",
    )
    .await;
    assert_eq!(location(&response), "/admin?tab=clients&notice=client-added");
    assert_eq!(store.list_clients().await.unwrap()[0].designation, "CEO");
}

#[tokio::test]
async fn project_delete_requires_confirmation() {
    let (app, store) = site_with_api().await;
    let id = seed_project(&store, "Delete Me").await;

    let html = body_text(get(app.clone(), &format!("/admin/projects/{id}/delete")).await).await;
    assert!(html.contains("Are you sure?"));
    assert_eq!(store.list_projects().await.unwrap().len(), 1);

    let response = post_form(app.clone(), &format!("/admin/projects/{id}/delete"), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?tab=projects&notice=project-deleted");
    assert!(store.list_projects().await.unwrap().is_empty());

    let html = body_text(get(app, "/admin?tab=projects&notice=project-deleted").await).await;
    assert!(html.contains("Project Deleted!"));
    assert!(html.contains("No projects added yet"));
}

#[tokio::test]
async fn client_delete_removes_only_that_client() {
    let (app, store) = site_with_api().await;
    let id = seed_client(&store, "Jane").await;
    seed_client(&store, "John").await;

    let response = post_form(app, &format!("/admin/clients/{id}/delete"), "").await;
    assert_eq!(location(&response), "/admin?tab=clients&notice=client-deleted");

    let remaining = store.list_clients().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "John");
}

// ---------------------------------------------------------------------------
// API unreachable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_api_renders_empty_lists() {
    let app = site_app(&dead_api_base().await);

    let response = get(app.clone(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No projects yet"));
    assert!(html.contains("No clients yet"));

    let html = body_text(get(app, "/admin?tab=subscribers").await).await;
    assert!(html.contains("No subscribers yet"));
}

#[tokio::test]
async fn failed_submission_keeps_values_without_message() {
    let app = site_app(&dead_api_base().await);

    let response = post_form(app, "/contact", CONTACT_FORM).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("value=\"Ada Lovelace\""));
    assert!(!html.contains("Message Sent!"));
    assert!(!html.contains("<dialog"));
}

#[tokio::test]
async fn failed_delete_returns_to_tab_without_message() {
    let app = site_app(&dead_api_base().await);
    let id = "0190a8f2-7c1e-7000-8000-000000000000";

    let response = post_form(app, &format!("/admin/projects/{id}/delete"), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?tab=projects");
}
