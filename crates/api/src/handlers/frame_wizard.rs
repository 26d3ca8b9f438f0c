//! Handlers for the frame creation wizard.
//!
//! Every entry point funnels into [`advance`], which resolves the next step
//! from whatever has been chosen so far and redirects there. Once a panel and
//! kind are known, the selection is parked in the wizard store and the token
//! travels to the kind's create endpoint.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use signage_core::types::DbId;
use signage_core::wizard::{self, FrameSelector, WizardStep};
use signage_db::models::canvas::Canvas;

use crate::error::AppResult;
use crate::handlers::lookup;
use crate::query::{blank_as_zero, CanvasIdParams, FrameFilterParams, PanelIdParams};
use crate::response::DataResponse;
use crate::select_list::{self, SelectList};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Forms and view models
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasForm {
    #[serde(deserialize_with = "blank_as_zero")]
    pub canvas_id: DbId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelForm {
    #[serde(deserialize_with = "blank_as_zero")]
    pub canvas_id: DbId,
    #[serde(deserialize_with = "blank_as_zero")]
    pub panel_id: DbId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameTypeForm {
    #[serde(deserialize_with = "blank_as_zero")]
    pub panel_id: DbId,
    pub frame_type: String,
}

#[derive(Debug, Serialize)]
pub struct ForCanvasView {
    pub canvases: SelectList,
}

#[derive(Debug, Serialize)]
pub struct ForPanelView {
    pub canvas: Canvas,
    pub panels: SelectList,
}

#[derive(Debug, Serialize)]
pub struct ForFrameTypeView {
    pub selector: FrameSelector,
    pub frame_types: SelectList,
}

// ---------------------------------------------------------------------------
// Step resolution
// ---------------------------------------------------------------------------

/// Redirect to the step that still needs input, or to the kind's create
/// endpoint when everything is known.
async fn advance(
    state: &AppState,
    canvas_id: DbId,
    panel_id: DbId,
    frame_type: &str,
) -> AppResult<Redirect> {
    let step = wizard::next_step(canvas_id, panel_id, frame_type);

    let token = match step {
        WizardStep::Create { panel_id, kind } => {
            let panel = lookup::panel_with_canvas(&state.pool, panel_id).await?;
            let token = state.wizard.put(lookup::selector_for(&panel, Some(kind)));
            tracing::info!(panel_id, %kind, %token, "Wizard selection parked");
            Some(token)
        }
        WizardStep::SelectFrameType { panel_id } => {
            lookup::panel_with_canvas(&state.pool, panel_id).await?;
            None
        }
        WizardStep::SelectCanvas | WizardStep::SelectPanel { .. } => None,
    };

    Ok(Redirect::to(&step.path(token)))
}

// ---------------------------------------------------------------------------
// GET /Frame/Create
// ---------------------------------------------------------------------------

/// Wizard entry point.
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<FrameFilterParams>,
) -> AppResult<Redirect> {
    advance(&state, params.canvas_id, params.panel_id, &params.frame_type).await
}

// ---------------------------------------------------------------------------
// /Frame/ForCanvas
// ---------------------------------------------------------------------------

pub async fn for_canvas(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ForCanvasView>>> {
    let canvases = select_list::canvases(&state.pool, 0).await?;
    Ok(Json(DataResponse {
        data: ForCanvasView { canvases },
    }))
}

pub async fn choose_canvas(
    State(state): State<AppState>,
    Form(form): Form<CanvasForm>,
) -> AppResult<Redirect> {
    advance(&state, form.canvas_id, 0, "").await
}

// ---------------------------------------------------------------------------
// /Frame/ForPanel
// ---------------------------------------------------------------------------

pub async fn for_panel(
    State(state): State<AppState>,
    Query(params): Query<CanvasIdParams>,
) -> AppResult<Json<DataResponse<ForPanelView>>> {
    let canvas = lookup::canvas(&state.pool, params.canvas_id).await?;
    let panels = select_list::panels(&state.pool, 0, canvas.id).await?;
    Ok(Json(DataResponse {
        data: ForPanelView { canvas, panels },
    }))
}

pub async fn choose_panel(
    State(state): State<AppState>,
    Form(form): Form<PanelForm>,
) -> AppResult<Redirect> {
    advance(&state, form.canvas_id, form.panel_id, "").await
}

// ---------------------------------------------------------------------------
// /Frame/ForFrameType
// ---------------------------------------------------------------------------

pub async fn for_frame_type(
    State(state): State<AppState>,
    Query(params): Query<PanelIdParams>,
) -> AppResult<Json<DataResponse<ForFrameTypeView>>> {
    let panel = lookup::panel_with_canvas(&state.pool, params.panel_id).await?;
    Ok(Json(DataResponse {
        data: ForFrameTypeView {
            selector: lookup::selector_for(&panel, None),
            frame_types: SelectList::frame_types(None),
        },
    }))
}

pub async fn choose_frame_type(
    State(state): State<AppState>,
    Form(form): Form<FrameTypeForm>,
) -> AppResult<Redirect> {
    advance(&state, 0, form.panel_id, &form.frame_type).await
}
