//! Handlers for the `/Level` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use signage_core::error::CoreError;
use signage_core::types::DbId;
use signage_db::models::level::{CreateLevel, Level};
use signage_db::repositories::LevelRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /Level
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLevel>,
) -> AppResult<(StatusCode, Json<DataResponse<Level>>)> {
    input.validate()?;
    let level = LevelRepo::create(&state.pool, &input).await?;
    tracing::info!(level_id = level.id, name = %level.name, "Level created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: level })))
}

/// GET /Level
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Level>>>> {
    let levels = LevelRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: levels }))
}

/// GET /Level/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Level>>> {
    let level = LevelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Level", id))?;
    Ok(Json(DataResponse { data: level }))
}
