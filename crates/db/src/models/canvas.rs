//! Canvas entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use signage_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `canvases` table: one physical display surface.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Canvas {
    pub id: DbId,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new canvas.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCanvas {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub width: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub height: i32,
}
