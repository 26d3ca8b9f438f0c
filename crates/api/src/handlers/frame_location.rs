//! Handlers for attaching frames to display locations and detaching them.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use signage_core::navigation::ReturnTo;
use signage_core::types::DbId;
use signage_db::models::location::Location;
use signage_db::repositories::{FrameRepo, LocationRepo};

use crate::error::AppResult;
use crate::handlers::lookup;
use crate::query::{blank_as_zero, ReturnToParams};
use crate::response::DataResponse;
use crate::select_list::{self, SelectList};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Forms and view models
// ---------------------------------------------------------------------------

/// The frame/location pair an attach or detach form is about.
#[derive(Debug, Serialize)]
pub struct LocationSelector {
    pub frame_id: DbId,
    pub location_id: Option<DbId>,
    pub location_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttachView {
    pub selector: LocationSelector,
    /// Locations not yet attached to the frame.
    pub locations: SelectList,
    /// Locations already attached, for context.
    pub attached: Vec<Location>,
    pub return_to: ReturnTo,
}

#[derive(Debug, Serialize)]
pub struct DetachView {
    pub selector: LocationSelector,
    pub return_to: ReturnTo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachForm {
    #[serde(deserialize_with = "blank_as_zero")]
    pub location_id: DbId,
    pub return_to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetachParams {
    #[serde(deserialize_with = "blank_as_zero")]
    pub location_id: DbId,
    pub return_to: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetachForm {
    #[serde(deserialize_with = "blank_as_zero")]
    pub id: DbId,
    #[serde(deserialize_with = "blank_as_zero")]
    pub location_id: DbId,
    #[serde(default)]
    pub return_to: Option<String>,
}

async fn attach_view(state: &AppState, frame_id: DbId, return_to: ReturnTo) -> AppResult<AttachView> {
    let locations = select_list::unattached_locations(&state.pool, frame_id).await?;
    let attached = LocationRepo::list_for_frame(&state.pool, frame_id).await?;
    Ok(AttachView {
        selector: LocationSelector {
            frame_id,
            location_id: None,
            location_name: None,
        },
        locations,
        attached,
        return_to,
    })
}

// ---------------------------------------------------------------------------
// /Frame/Attach/{id}
// ---------------------------------------------------------------------------

/// Show the locations the frame can still be attached to.
pub async fn attach_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ReturnToParams>,
) -> AppResult<Json<DataResponse<AttachView>>> {
    lookup::frame(&state.pool, id).await?;
    let view = attach_view(&state, id, params.target()).await?;
    Ok(Json(DataResponse { data: view }))
}

/// Attach the chosen location, or show the form again if none was chosen.
pub async fn attach(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<AttachForm>,
) -> AppResult<Response> {
    lookup::frame(&state.pool, id).await?;
    let return_to = ReturnTo::or_default(form.return_to.as_deref());

    if form.location_id <= 0 {
        let view = attach_view(&state, id, return_to).await?;
        return Ok(Json(DataResponse { data: view }).into_response());
    }

    lookup::location(&state.pool, form.location_id).await?;
    let created = FrameRepo::attach_location(&state.pool, id, form.location_id).await?;

    tracing::info!(
        frame_id = id,
        location_id = form.location_id,
        created,
        "Location attached to frame"
    );

    Ok(Redirect::to(return_to.as_str()).into_response())
}

// ---------------------------------------------------------------------------
// /Frame/Detach
// ---------------------------------------------------------------------------

/// Confirmation view naming the location to detach.
pub async fn detach_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DetachParams>,
) -> AppResult<Json<DataResponse<DetachView>>> {
    lookup::frame(&state.pool, id).await?;
    let location = lookup::location(&state.pool, params.location_id).await?;

    Ok(Json(DataResponse {
        data: DetachView {
            selector: LocationSelector {
                frame_id: id,
                location_id: Some(location.id),
                location_name: Some(location.name),
            },
            return_to: ReturnTo::or_default(params.return_to.as_deref()),
        },
    }))
}

/// Remove the attachment and return to the list.
pub async fn detach(
    State(state): State<AppState>,
    Form(form): Form<DetachForm>,
) -> AppResult<Redirect> {
    lookup::frame(&state.pool, form.id).await?;
    lookup::location(&state.pool, form.location_id).await?;

    let removed = FrameRepo::detach_location(&state.pool, form.id, form.location_id).await?;

    tracing::info!(
        frame_id = form.id,
        location_id = form.location_id,
        removed,
        "Location detached from frame"
    );

    let return_to = ReturnTo::or_default(form.return_to.as_deref());
    Ok(Redirect::to(return_to.as_str()))
}
