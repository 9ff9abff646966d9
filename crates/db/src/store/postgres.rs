use async_trait::async_trait;
use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::models::contact::{Contact, CreateContact};
use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};
use digitalpro_core::types::DbId;

use super::{RecordStore, StoreResult};
use crate::repositories::{ClientRepo, ContactRepo, ProjectRepo, SubscriberRepo};
use crate::DbPool;

/// [`RecordStore`] backed by PostgreSQL, one table per collection.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn create_client(&self, input: &CreateClient) -> StoreResult<Client> {
        Ok(ClientRepo::create(&self.pool, input).await?)
    }

    async fn list_clients(&self) -> StoreResult<Vec<Client>> {
        Ok(ClientRepo::list(&self.pool).await?)
    }

    async fn delete_client(&self, id: DbId) -> StoreResult<Option<Client>> {
        Ok(ClientRepo::delete(&self.pool, id).await?)
    }

    async fn create_contact(&self, input: &CreateContact) -> StoreResult<Contact> {
        Ok(ContactRepo::create(&self.pool, input).await?)
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        Ok(ContactRepo::list(&self.pool).await?)
    }

    async fn create_subscriber(&self, input: &CreateSubscriber) -> StoreResult<Subscriber> {
        Ok(SubscriberRepo::create(&self.pool, input).await?)
    }

    async fn list_subscribers(&self) -> StoreResult<Vec<Subscriber>> {
        Ok(SubscriberRepo::list(&self.pool).await?)
    }
}
