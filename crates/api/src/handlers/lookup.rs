//! Row lookups shared by several handlers. A missing row becomes
//! `CoreError::NotFound`, which renders as a 404.

use signage_core::error::CoreError;
use signage_core::types::DbId;
use signage_core::wizard::FrameSelector;
use signage_core::frame_kind::FrameKind;
use signage_db::models::canvas::Canvas;
use signage_db::models::frame::{Frame, FrameListing};
use signage_db::models::location::Location;
use signage_db::models::panel::PanelWithCanvas;
use signage_db::repositories::{CanvasRepo, FrameRepo, LocationRepo, PanelRepo};
use sqlx::PgPool;

use crate::error::AppResult;

pub async fn canvas(pool: &PgPool, id: DbId) -> AppResult<Canvas> {
    Ok(CanvasRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Canvas", id))?)
}

pub async fn panel_with_canvas(pool: &PgPool, id: DbId) -> AppResult<PanelWithCanvas> {
    Ok(PanelRepo::find_with_canvas(pool, id)
        .await?
        .ok_or(CoreError::not_found("Panel", id))?)
}

pub async fn frame(pool: &PgPool, id: DbId) -> AppResult<Frame> {
    Ok(FrameRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Frame", id))?)
}

pub async fn frame_listing(pool: &PgPool, id: DbId) -> AppResult<FrameListing> {
    Ok(FrameRepo::find_listing(pool, id)
        .await?
        .ok_or(CoreError::not_found("Frame", id))?)
}

pub async fn location(pool: &PgPool, id: DbId) -> AppResult<Location> {
    Ok(LocationRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Location", id))?)
}

/// Wizard selector for a loaded panel.
pub fn selector_for(panel: &PanelWithCanvas, frame_type: Option<FrameKind>) -> FrameSelector {
    FrameSelector {
        canvas_id: panel.panel.canvas_id,
        canvas_name: panel.canvas_name.clone(),
        panel_id: panel.panel.id,
        panel_name: panel.panel.name.clone(),
        frame_type,
    }
}
