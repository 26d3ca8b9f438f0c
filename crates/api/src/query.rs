//! Shared query and form parameter types for API handlers.
//!
//! Parameter names are camelCase on the wire (`canvasId`, `panelId`,
//! `frameType`, `returnTo`). Missing ids default to `0`, meaning "not
//! chosen", and a missing frame type defaults to the empty string.
//!
//! Select boxes post their placeholder option as an empty value
//! (`canvasId=`). Id fields go through [`blank_as_zero`] or
//! [`blank_as_none`] so such a value reads as "not chosen" instead of
//! failing extraction.

use serde::{Deserialize, Deserializer};
use signage_core::navigation::ReturnTo;
use signage_core::types::DbId;

/// Deserialize an id, reading a blank or non-numeric value as `0`.
pub fn blank_as_zero<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

/// Deserialize an optional id, reading a blank or non-numeric value as
/// `None`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|r| r.trim().parse().ok()))
}

/// Filter and wizard selections (`?canvasId=&panelId=&frameType=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameFilterParams {
    #[serde(deserialize_with = "blank_as_zero")]
    pub canvas_id: DbId,
    #[serde(deserialize_with = "blank_as_zero")]
    pub panel_id: DbId,
    pub frame_type: String,
}

/// `?canvasId=` for the panel-selection step.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasIdParams {
    #[serde(deserialize_with = "blank_as_zero")]
    pub canvas_id: DbId,
}

/// `?panelId=` for the frame-type-selection step.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelIdParams {
    #[serde(deserialize_with = "blank_as_zero")]
    pub panel_id: DbId,
}

/// Optional `?returnTo=` on actions that redirect back to a list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnToParams {
    pub return_to: Option<String>,
}

impl ReturnToParams {
    /// The validated target, falling back to the frame list.
    pub fn target(&self) -> ReturnTo {
        ReturnTo::or_default(self.return_to.as_deref())
    }
}
