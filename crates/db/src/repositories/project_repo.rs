//! Repository for the `projects` table.

use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::types::{new_id, DbId};
use sqlx::PgPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image, created_at";

/// Provides create, list and delete for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project under a freshly generated id, returning the row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, name, description, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Permanently delete a project, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
