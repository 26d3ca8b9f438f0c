//! Repository for the `panels` table.

use sqlx::PgPool;
use signage_core::types::DbId;

use crate::models::option::IdLabel;
use crate::models::panel::{CreatePanel, Panel, PanelWithCanvas};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, canvas_id, name, pos_top, pos_left, width, height, created_at, updated_at";

/// Same columns, qualified for queries joining `canvases c`.
const JOINED_COLUMNS: &str = "p.id, p.canvas_id, p.name, p.pos_top, p.pos_left, p.width, \
    p.height, p.created_at, p.updated_at, c.name AS canvas_name";

/// Provides CRUD operations for panels.
pub struct PanelRepo;

impl PanelRepo {
    /// Insert a new panel, returning the created row.
    ///
    /// `pos_top` and `pos_left` default to 0 if omitted.
    pub async fn create(pool: &PgPool, input: &CreatePanel) -> Result<Panel, sqlx::Error> {
        let query = format!(
            "INSERT INTO panels (canvas_id, name, pos_top, pos_left, width, height)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Panel>(&query)
            .bind(input.canvas_id)
            .bind(&input.name)
            .bind(input.pos_top)
            .bind(input.pos_left)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Find a panel by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Panel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM panels WHERE id = $1");
        sqlx::query_as::<_, Panel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a panel by ID together with its canvas name.
    pub async fn find_with_canvas(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PanelWithCanvas>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM panels p
             JOIN canvases c ON c.id = p.canvas_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PanelWithCanvas>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List panels with their canvas names, optionally limited to one canvas.
    pub async fn list(
        pool: &PgPool,
        canvas_id: Option<DbId>,
    ) -> Result<Vec<PanelWithCanvas>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM panels p
             JOIN canvases c ON c.id = p.canvas_id
             WHERE ($1::BIGINT IS NULL OR p.canvas_id = $1)
             ORDER BY c.name, p.name, p.id"
        );
        sqlx::query_as::<_, PanelWithCanvas>(&query)
            .bind(canvas_id)
            .fetch_all(pool)
            .await
    }

    /// Dropdown entries for the panels of one canvas, labelled by panel name.
    pub async fn options_for_canvas(
        pool: &PgPool,
        canvas_id: DbId,
    ) -> Result<Vec<IdLabel>, sqlx::Error> {
        sqlx::query_as::<_, IdLabel>(
            "SELECT id, name AS label FROM panels WHERE canvas_id = $1 ORDER BY name, id",
        )
        .bind(canvas_id)
        .fetch_all(pool)
        .await
    }

    /// Dropdown entries for every panel, labelled `"<canvas> : <panel>"`.
    pub async fn options_all(pool: &PgPool) -> Result<Vec<IdLabel>, sqlx::Error> {
        sqlx::query_as::<_, IdLabel>(
            "SELECT p.id, c.name || ' : ' || p.name AS label
             FROM panels p
             JOIN canvases c ON c.id = p.canvas_id
             ORDER BY label, p.id",
        )
        .fetch_all(pool)
        .await
    }
}
