//! Panel entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use signage_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `panels` table: a rectangular region of a canvas.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Panel {
    pub id: DbId,
    pub canvas_id: DbId,
    pub name: String,
    pub pos_top: i32,
    pub pos_left: i32,
    pub width: i32,
    pub height: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A panel together with the name of its canvas.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PanelWithCanvas {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub panel: Panel,
    pub canvas_name: String,
}

/// DTO for creating a new panel.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePanel {
    pub canvas_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub pos_top: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub pos_left: Option<i32>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub width: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub height: i32,
}
