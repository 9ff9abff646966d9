use async_trait::async_trait;
use chrono::Utc;
use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::models::contact::{Contact, CreateContact};
use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};
use digitalpro_core::types::{new_id, DbId};
use tokio::sync::RwLock;

use super::{RecordStore, StoreResult};

#[derive(Default)]
struct Collections {
    projects: Vec<Project>,
    clients: Vec<Client>,
    contacts: Vec<Contact>,
    subscribers: Vec<Subscriber>,
}

/// [`RecordStore`] held entirely in process memory.
///
/// Vectors keep insertion order. Ids and timestamps are assigned under the
/// write lock, so that order agrees with `(created_at, id)`. Contents are
/// lost when the store is dropped. Operations never fail.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        let mut inner = self.inner.write().await;
        let project = Project {
            id: new_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            created_at: Utc::now(),
        };
        inner.projects.push(project.clone());
        Ok(project)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.inner.read().await.projects.clone())
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let mut inner = self.inner.write().await;
        let position = inner.projects.iter().position(|p| p.id == id);
        Ok(position.map(|idx| inner.projects.remove(idx)))
    }

    async fn create_client(&self, input: &CreateClient) -> StoreResult<Client> {
        let mut inner = self.inner.write().await;
        let client = Client {
            id: new_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            designation: input.designation.clone(),
            image: input.image.clone(),
            created_at: Utc::now(),
        };
        inner.clients.push(client.clone());
        Ok(client)
    }

    async fn list_clients(&self) -> StoreResult<Vec<Client>> {
        Ok(self.inner.read().await.clients.clone())
    }

    async fn delete_client(&self, id: DbId) -> StoreResult<Option<Client>> {
        let mut inner = self.inner.write().await;
        let position = inner.clients.iter().position(|c| c.id == id);
        Ok(position.map(|idx| inner.clients.remove(idx)))
    }

    async fn create_contact(&self, input: &CreateContact) -> StoreResult<Contact> {
        let mut inner = self.inner.write().await;
        let contact = Contact {
            id: new_id(),
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            mobile: input.mobile.clone(),
            city: input.city.clone(),
            created_at: Utc::now(),
        };
        inner.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.inner.read().await.contacts.clone())
    }

    async fn create_subscriber(&self, input: &CreateSubscriber) -> StoreResult<Subscriber> {
        let mut inner = self.inner.write().await;
        let subscriber = Subscriber {
            id: new_id(),
            email: input.email.clone(),
            created_at: Utc::now(),
        };
        inner.subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn list_subscribers(&self) -> StoreResult<Vec<Subscriber>> {
        Ok(self.inner.read().await.subscribers.clone())
    }
}
