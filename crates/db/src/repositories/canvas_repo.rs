//! Repository for the `canvases` table.

use sqlx::PgPool;
use signage_core::types::DbId;

use crate::models::canvas::{Canvas, CreateCanvas};
use crate::models::option::IdLabel;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, width, height, created_at, updated_at";

/// Provides CRUD operations for canvases.
pub struct CanvasRepo;

impl CanvasRepo {
    /// Insert a new canvas, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCanvas) -> Result<Canvas, sqlx::Error> {
        let query = format!(
            "INSERT INTO canvases (name, width, height)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Canvas>(&query)
            .bind(&input.name)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Find a canvas by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Canvas>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM canvases WHERE id = $1");
        sqlx::query_as::<_, Canvas>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all canvases ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Canvas>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM canvases ORDER BY name, id");
        sqlx::query_as::<_, Canvas>(&query).fetch_all(pool).await
    }

    /// Dropdown entries for every canvas, ordered by name.
    pub async fn options(pool: &PgPool) -> Result<Vec<IdLabel>, sqlx::Error> {
        sqlx::query_as::<_, IdLabel>("SELECT id, name AS label FROM canvases ORDER BY name, id")
            .fetch_all(pool)
            .await
    }
}
