//! Projected `(id, label)` rows used to fill dropdown lists.

use serde::Serialize;
use sqlx::FromRow;
use signage_core::types::DbId;

/// One dropdown entry: the row id and the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct IdLabel {
    pub id: DbId,
    pub label: String,
}
