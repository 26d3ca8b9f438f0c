//! Location entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use signage_core::types::DbId;
use validator::Validate;

/// A row from the `locations` table: a display site on a level.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub level_id: DbId,
    pub name: String,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLocation {
    pub level_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
}
