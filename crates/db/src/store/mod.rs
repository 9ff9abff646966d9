//! The record store contract and its backends.

mod memory;
mod postgres;

use async_trait::async_trait;
use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::models::contact::{Contact, CreateContact};
use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};
use digitalpro_core::types::DbId;

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for the four independent collections.
///
/// Every `create_*` assigns a fresh id and returns the stored record.
/// Every `list_*` returns the whole collection in insertion order.
/// Only projects and clients can be deleted; a delete of an unknown id
/// returns `Ok(None)` rather than an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project>;
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;
    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn create_client(&self, input: &CreateClient) -> StoreResult<Client>;
    async fn list_clients(&self) -> StoreResult<Vec<Client>>;
    async fn delete_client(&self, id: DbId) -> StoreResult<Option<Client>>;

    async fn create_contact(&self, input: &CreateContact) -> StoreResult<Contact>;
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>>;

    async fn create_subscriber(&self, input: &CreateSubscriber) -> StoreResult<Subscriber>;
    async fn list_subscribers(&self) -> StoreResult<Vec<Subscriber>>;
}
