//! Typed HTTP client for the DigitalPro REST API.
//!
//! One method per endpoint. No timeout, retry or deduplication is layered on
//! top of reqwest's defaults: a double submit sends two requests.

use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::models::contact::{Contact, CreateContact};
use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};
use digitalpro_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the API rooted at `base_url` (trailing `/` ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send `request` and decode a success body, or turn the API's
    /// `{"error": ...}` body into [`ClientError::Api`].
    async fn execute<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Self::execute(self.http.get(self.url(path))).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        Self::execute(self.http.post(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Self::execute(self.http.delete(self.url(path))).await
    }

    // -- projects --

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.get("/projects").await
    }

    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        self.post("/projects", input).await
    }

    /// `Ok(None)` when the API had no project with this id.
    pub async fn delete_project(&self, id: DbId) -> Result<Option<Project>, ClientError> {
        self.delete(&format!("/projects/{id}")).await
    }

    // -- clients --

    pub async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.get("/clients").await
    }

    pub async fn create_client(&self, input: &CreateClient) -> Result<Client, ClientError> {
        self.post("/clients", input).await
    }

    pub async fn delete_client(&self, id: DbId) -> Result<Option<Client>, ClientError> {
        self.delete(&format!("/clients/{id}")).await
    }

    // -- contacts --

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        self.get("/contacts").await
    }

    pub async fn create_contact(&self, input: &CreateContact) -> Result<Contact, ClientError> {
        self.post("/contacts", input).await
    }

    // -- subscribers --

    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>, ClientError> {
        self.get("/subs").await
    }

    pub async fn create_subscriber(
        &self,
        input: &CreateSubscriber,
    ) -> Result<Subscriber, ClientError> {
        self.post("/subs", input).await
    }
}
