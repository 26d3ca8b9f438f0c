//! Repository for the `locations` table.

use sqlx::PgPool;
use signage_core::types::DbId;

use crate::models::location::{CreateLocation, Location};
use crate::models::option::IdLabel;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, level_id, name";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (level_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(input.level_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List locations ordered by name, optionally limited to one level.
    pub async fn list(pool: &PgPool, level_id: Option<DbId>) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM locations
             WHERE ($1::BIGINT IS NULL OR level_id = $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(level_id)
            .fetch_all(pool)
            .await
    }

    /// Locations attached to a frame, ordered by name.
    pub async fn list_for_frame(pool: &PgPool, frame_id: DbId) -> Result<Vec<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(
            "SELECT l.id, l.level_id, l.name
             FROM locations l
             JOIN frame_locations fl ON fl.location_id = l.id
             WHERE fl.frame_id = $1
             ORDER BY l.name, l.id",
        )
        .bind(frame_id)
        .fetch_all(pool)
        .await
    }

    /// Dropdown entries for locations not yet attached to `frame_id`,
    /// labelled `"<level> : <location>"` and ordered by label.
    pub async fn unattached_options(
        pool: &PgPool,
        frame_id: DbId,
    ) -> Result<Vec<IdLabel>, sqlx::Error> {
        sqlx::query_as::<_, IdLabel>(
            "SELECT l.id, lv.name || ' : ' || l.name AS label
             FROM locations l
             JOIN levels lv ON lv.id = l.level_id
             WHERE NOT EXISTS (
                 SELECT 1 FROM frame_locations fl
                 WHERE fl.frame_id = $1 AND fl.location_id = l.id
             )
             ORDER BY label, l.id",
        )
        .bind(frame_id)
        .fetch_all(pool)
        .await
    }
}
