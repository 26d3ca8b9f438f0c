//! Handlers for the `/Panel` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use signage_core::types::DbId;
use signage_db::models::panel::{CreatePanel, PanelWithCanvas};
use signage_db::repositories::PanelRepo;

use crate::error::AppResult;
use crate::handlers::lookup;
use crate::query::blank_as_none;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelListParams {
    #[serde(deserialize_with = "blank_as_none")]
    pub canvas_id: Option<DbId>,
}

/// POST /Panel
///
/// The parent canvas must exist; it is checked up front so the caller gets
/// a 404 naming the canvas rather than a foreign key conflict.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePanel>,
) -> AppResult<(StatusCode, Json<DataResponse<PanelWithCanvas>>)> {
    input.validate()?;
    lookup::canvas(&state.pool, input.canvas_id).await?;

    let panel = PanelRepo::create(&state.pool, &input).await?;
    let created = lookup::panel_with_canvas(&state.pool, panel.id).await?;

    tracing::info!(panel_id = panel.id, canvas_id = panel.canvas_id, "Panel created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /Panel?canvasId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PanelListParams>,
) -> AppResult<Json<DataResponse<Vec<PanelWithCanvas>>>> {
    let canvas_id = params.canvas_id.filter(|id| *id > 0);
    let panels = PanelRepo::list(&state.pool, canvas_id).await?;
    Ok(Json(DataResponse { data: panels }))
}

/// GET /Panel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PanelWithCanvas>>> {
    let panel = lookup::panel_with_canvas(&state.pool, id).await?;
    Ok(Json(DataResponse { data: panel }))
}
