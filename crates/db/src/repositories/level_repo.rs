//! Repository for the `levels` table.

use sqlx::PgPool;
use signage_core::types::DbId;

use crate::models::level::{CreateLevel, Level};

/// Provides CRUD operations for levels.
pub struct LevelRepo;

impl LevelRepo {
    /// Insert a new level, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLevel) -> Result<Level, sqlx::Error> {
        sqlx::query_as::<_, Level>("INSERT INTO levels (name) VALUES ($1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a level by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Level>, sqlx::Error> {
        sqlx::query_as::<_, Level>("SELECT id, name FROM levels WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all levels ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Level>, sqlx::Error> {
        sqlx::query_as::<_, Level>("SELECT id, name FROM levels ORDER BY name, id")
            .fetch_all(pool)
            .await
    }
}
