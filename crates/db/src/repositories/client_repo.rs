//! Repository for the `clients` table.

use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::types::{new_id, DbId};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, designation, image, created_at";

/// Provides create, list and delete for clients.
pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (id, name, description, designation, image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.designation)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// List all clients in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at, id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Permanently delete a client, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("DELETE FROM clients WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
