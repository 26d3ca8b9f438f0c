//! Level entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use signage_core::types::DbId;
use validator::Validate;

/// A row from the `levels` table: a floor or area grouping locations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Level {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new level.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLevel {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
}
