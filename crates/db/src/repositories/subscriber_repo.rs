//! Repository for the `subscribers` table. Append-only: no delete.

use digitalpro_core::models::subscriber::{CreateSubscriber, Subscriber};
use digitalpro_core::types::new_id;
use sqlx::PgPool;

const COLUMNS: &str = "id, email, created_at";

pub struct SubscriberRepo;

impl SubscriberRepo {
    /// Insert a subscriber. The same email may be subscribed many times.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubscriber,
    ) -> Result<Subscriber, sqlx::Error> {
        let query =
            format!("INSERT INTO subscribers (id, email) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(new_id())
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscribers ORDER BY created_at, id");
        sqlx::query_as::<_, Subscriber>(&query).fetch_all(pool).await
    }
}
