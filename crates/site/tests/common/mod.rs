#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use digitalpro_api::config::{CorsOrigins, ServerConfig};
use digitalpro_api::router::build_app_router;
use digitalpro_api::state::AppState;
use digitalpro_db::MemoryStore;
use digitalpro_site::api_client::ApiClient;
use digitalpro_site::router::build_site_router;
use digitalpro_site::state::SiteState;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serve the real API router over a fresh in-memory store on an ephemeral
/// local port. Returns the base URL and the store for seeding/inspection.
pub async fn spawn_api() -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        database_url: "memory://".to_string(),
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
    };
    let app = build_app_router(AppState::new(store.clone()), &config);

    (serve(app).await, store)
}

/// Serve `app` on an ephemeral local port, returning its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on, so every call is refused.
pub async fn dead_api_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Site router with both views pointed at `base`.
pub fn site_app(base: &str) -> Router {
    build_site_router(SiteState::new(ApiClient::new(base), ApiClient::new(base)))
}

/// Site router over a running API, plus the API's store.
pub async fn site_with_api() -> (Router, Arc<MemoryStore>) {
    let (base, store) = spawn_api().await;
    (site_app(&base), store)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
        .to_string()
}
