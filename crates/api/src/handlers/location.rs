//! Handlers for the `/Location` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use signage_core::error::CoreError;
use signage_core::types::DbId;
use signage_db::models::location::{CreateLocation, Location};
use signage_db::repositories::{LevelRepo, LocationRepo};

use crate::error::AppResult;
use crate::handlers::lookup;
use crate::query::blank_as_none;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationListParams {
    #[serde(deserialize_with = "blank_as_none")]
    pub level_id: Option<DbId>,
}

/// POST /Location
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<DataResponse<Location>>)> {
    input.validate()?;
    LevelRepo::find_by_id(&state.pool, input.level_id)
        .await?
        .ok_or(CoreError::not_found("Level", input.level_id))?;

    let location = LocationRepo::create(&state.pool, &input).await?;
    tracing::info!(location_id = location.id, level_id = location.level_id, "Location created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}

/// GET /Location?levelId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LocationListParams>,
) -> AppResult<Json<DataResponse<Vec<Location>>>> {
    let level_id = params.level_id.filter(|id| *id > 0);
    let locations = LocationRepo::list(&state.pool, level_id).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// GET /Location/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Location>>> {
    let location = lookup::location(&state.pool, id).await?;
    Ok(Json(DataResponse { data: location }))
}
