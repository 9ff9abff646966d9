//! Repository for the `contacts` table. Append-only: no delete.

use digitalpro_core::models::contact::{Contact, CreateContact};
use digitalpro_core::types::new_id;
use sqlx::PgPool;

const COLUMNS: &str = "id, full_name, email, mobile, city, created_at";

pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (id, full_name, email, mobile, city)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(new_id())
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.mobile)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at, id");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }
}
