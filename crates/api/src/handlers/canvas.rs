//! Handlers for the `/Canvas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use signage_core::types::DbId;
use signage_db::models::canvas::{Canvas, CreateCanvas};
use signage_db::repositories::CanvasRepo;

use crate::error::AppResult;
use crate::handlers::lookup;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /Canvas
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCanvas>,
) -> AppResult<(StatusCode, Json<DataResponse<Canvas>>)> {
    input.validate()?;
    let canvas = CanvasRepo::create(&state.pool, &input).await?;
    tracing::info!(canvas_id = canvas.id, name = %canvas.name, "Canvas created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: canvas })))
}

/// GET /Canvas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Canvas>>>> {
    let canvases = CanvasRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: canvases }))
}

/// GET /Canvas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Canvas>>> {
    let canvas = lookup::canvas(&state.pool, id).await?;
    Ok(Json(DataResponse { data: canvas }))
}
