//! Handlers for the frame list and the type-dispatch redirects.
//!
//! Details, edit and delete are owned by each kind's controller; the frame
//! controller only loads the frame and forwards to `/{Kind}/{Action}/{id}`.

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::Serialize;

use signage_core::frame_kind::{FrameAction, FrameKind};
use signage_core::navigation::ReturnTo;
use signage_core::types::DbId;
use signage_db::models::frame::{FrameFilter, FrameListing};
use signage_db::repositories::FrameRepo;

use crate::error::AppResult;
use crate::handlers::lookup;
use crate::query::FrameFilterParams;
use crate::response::DataResponse;
use crate::select_list::{self, SelectList};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Frame list with the dropdowns reflecting the active filter.
#[derive(Debug, Serialize)]
pub struct FrameIndexView {
    pub frames: Vec<FrameListing>,
    pub canvases: SelectList,
    pub panels: SelectList,
    pub frame_types: SelectList,
    /// URL reproducing this list, for actions that should come back here.
    pub return_to: ReturnTo,
}

// ---------------------------------------------------------------------------
// GET /Frame
// ---------------------------------------------------------------------------

/// List frames, optionally filtered by canvas, panel, and frame type.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FrameFilterParams>,
) -> AppResult<Json<DataResponse<FrameIndexView>>> {
    let filter = FrameFilter {
        canvas_id: (params.canvas_id > 0).then_some(params.canvas_id),
        panel_id: (params.panel_id > 0).then_some(params.panel_id),
        frame_type: (!params.frame_type.is_empty()).then(|| params.frame_type.clone()),
    };

    let frames = FrameRepo::list(&state.pool, &filter).await?;
    let canvases = select_list::canvases(&state.pool, params.canvas_id).await?;
    let panels = select_list::panels(&state.pool, params.panel_id, params.canvas_id).await?;
    let frame_types = SelectList::frame_types(FrameKind::parse(&params.frame_type));

    tracing::debug!(
        count = frames.len(),
        canvas_id = params.canvas_id,
        panel_id = params.panel_id,
        frame_type = %params.frame_type,
        "Listed frames"
    );

    Ok(Json(DataResponse {
        data: FrameIndexView {
            frames,
            canvases,
            panels,
            frame_types,
            return_to: ReturnTo::frame_list(params.canvas_id, params.panel_id, &params.frame_type),
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /Frame/{Details,Edit,Delete}/{id}
// ---------------------------------------------------------------------------

pub async fn details(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    dispatch(&state, id, FrameAction::Details).await
}

pub async fn edit(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    dispatch(&state, id, FrameAction::Edit).await
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    dispatch(&state, id, FrameAction::Delete).await
}

/// Load the frame and redirect to `action` on its kind's controller.
async fn dispatch(state: &AppState, id: DbId, action: FrameAction) -> AppResult<Redirect> {
    let listing = lookup::frame_listing(&state.pool, id).await?;
    let kind = listing.frame.frame_type;

    tracing::debug!(frame_id = id, %kind, action = action.as_str(), "Dispatching frame action");

    Ok(Redirect::to(&kind.action_path(action, id)))
}
