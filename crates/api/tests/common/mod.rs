#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use digitalpro_api::config::{CorsOrigins, ServerConfig};
use digitalpro_api::router::build_app_router;
use digitalpro_api::state::AppState;
use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::models::contact::{Contact, CreateContact};
use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};
use digitalpro_core::types::DbId;
use digitalpro_db::{MemoryStore, RecordStore, StoreError, StoreResult};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        database_url: "memory://".to_string(),
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn RecordStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Router over a fresh, empty in-memory store.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (build_test_app(store.clone()), store)
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Assert a 400 with the given error code, returning the error message.
pub async fn expect_bad_request(response: Response<Body>, code: &str) -> String {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected body: {json}");
    json["error"].as_str().unwrap().to_string()
}

/// A store whose every operation fails the way an unreachable database does.
pub struct FailingStore;

fn store_down<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn health_check(&self) -> StoreResult<()> {
        store_down()
    }
    async fn create_project(&self, _: &CreateProject) -> StoreResult<Project> {
        store_down()
    }
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        store_down()
    }
    async fn delete_project(&self, _: DbId) -> StoreResult<Option<Project>> {
        store_down()
    }
    async fn create_client(&self, _: &CreateClient) -> StoreResult<Client> {
        store_down()
    }
    async fn list_clients(&self) -> StoreResult<Vec<Client>> {
        store_down()
    }
    async fn delete_client(&self, _: DbId) -> StoreResult<Option<Client>> {
        store_down()
    }
    async fn create_contact(&self, _: &CreateContact) -> StoreResult<Contact> {
        store_down()
    }
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        store_down()
    }
    async fn create_subscriber(&self, _: &CreateSubscriber) -> StoreResult<Subscriber> {
        store_down()
    }
    async fn list_subscribers(&self) -> StoreResult<Vec<Subscriber>> {
        store_down()
    }
}
