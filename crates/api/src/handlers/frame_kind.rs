//! Per-kind frame controllers (`/News`, `/Clock`, ...).
//!
//! One set of handlers serves every kind. The router mounts it once per
//! [`FrameKind`] and injects the kind as an [`Extension`], so a request can
//! only ever reach a registered kind. A frame requested under the wrong kind
//! is reported as not found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use signage_core::error::CoreError;
use signage_core::frame_kind::FrameKind;
use signage_core::types::{DbId, Timestamp};
use signage_core::wizard::{self, FrameSelector};
use signage_db::models::frame::{CreateFrame, FrameDetail, FrameListing, UpdateFrame};
use signage_db::repositories::FrameRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::lookup;
use crate::query::{blank_as_zero, ReturnToParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters and view models
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFormParams {
    #[serde(deserialize_with = "blank_as_zero")]
    pub panel_id: DbId,
    pub wizard: Option<Uuid>,
}

/// Starting point for a new frame of one kind.
#[derive(Debug, Serialize)]
pub struct CreateFrameView {
    pub selector: FrameSelector,
    pub detail: FrameDetail,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a frame and make sure it is of `kind`.
async fn ensure_frame_of_kind(state: &AppState, kind: FrameKind, id: DbId) -> AppResult<FrameListing> {
    let listing = lookup::frame_listing(&state.pool, id).await?;
    if listing.frame.frame_type != kind {
        return Err(CoreError::not_found("Frame", id).into());
    }
    Ok(listing)
}

/// A detail payload must describe the controller's own kind.
fn ensure_detail_kind(kind: FrameKind, detail: &FrameDetail) -> AppResult<()> {
    if detail.kind() != kind {
        return Err(AppError::BadRequest(format!(
            "{} detail cannot be used for a {kind} frame",
            detail.kind()
        )));
    }
    detail.validate()?;
    Ok(())
}

/// `ends_on` may not precede `begins_on`.
fn check_schedule(begins_on: Option<Timestamp>, ends_on: Option<Timestamp>) -> AppResult<()> {
    if let (Some(begins), Some(ends)) = (begins_on, ends_on) {
        if ends < begins {
            return Err(CoreError::Validation("ends_on must not precede begins_on".to_string()).into());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// /{Kind}/Create
// ---------------------------------------------------------------------------

/// Create form. Takes the parked wizard selection when the token is live and
/// matches this kind (and panel, if one is given); otherwise rebuilds the
/// selection from `panelId`, or sends the user back to the start of the
/// wizard.
pub async fn create_form(
    State(state): State<AppState>,
    Extension(kind): Extension<FrameKind>,
    Query(params): Query<CreateFormParams>,
) -> AppResult<Response> {
    let parked = params
        .wizard
        .and_then(|token| state.wizard.take(token))
        .filter(|s| {
            s.frame_type == Some(kind) && (params.panel_id <= 0 || s.panel_id == params.panel_id)
        });

    let selector = match parked {
        Some(selector) => selector,
        None if params.panel_id <= 0 => {
            let start = wizard::next_step(0, 0, kind.as_str());
            return Ok(Redirect::to(&start.path(None)).into_response());
        }
        None => {
            let panel = lookup::panel_with_canvas(&state.pool, params.panel_id).await?;
            lookup::selector_for(&panel, Some(kind))
        }
    };

    Ok(Json(DataResponse {
        data: CreateFrameView {
            selector,
            detail: FrameDetail::default_for(kind),
        },
    })
    .into_response())
}

/// Insert a frame of this kind with its detail row.
pub async fn create(
    State(state): State<AppState>,
    Extension(kind): Extension<FrameKind>,
    Json(input): Json<CreateFrame>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_detail_kind(kind, &input.detail)?;
    check_schedule(input.begins_on, input.ends_on)?;
    lookup::panel_with_canvas(&state.pool, input.panel_id).await?;

    let frame = FrameRepo::create(&state.pool, &input).await?;
    let listing = lookup::frame_listing(&state.pool, frame.id).await?;

    tracing::info!(frame_id = frame.id, panel_id = frame.panel_id, %kind, "Frame created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: listing })))
}

// ---------------------------------------------------------------------------
// /{Kind}/Details/{id}, /{Kind}/Edit/{id}
// ---------------------------------------------------------------------------

/// The frame with its relations. Serves the details page and the edit and
/// delete forms.
pub async fn details(
    State(state): State<AppState>,
    Extension(kind): Extension<FrameKind>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FrameListing>>> {
    let listing = ensure_frame_of_kind(&state, kind, id).await?;
    Ok(Json(DataResponse { data: listing }))
}

/// Apply an edit. A detail payload replaces the frame's detail row.
pub async fn update(
    State(state): State<AppState>,
    Extension(kind): Extension<FrameKind>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFrame>,
) -> AppResult<Json<DataResponse<FrameListing>>> {
    input.validate()?;
    let existing = ensure_frame_of_kind(&state, kind, id).await?;
    if let Some(detail) = &input.detail {
        ensure_detail_kind(kind, detail)?;
    }
    check_schedule(
        input.begins_on.unwrap_or(existing.frame.begins_on),
        input.ends_on.unwrap_or(existing.frame.ends_on),
    )?;

    FrameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Frame", id))?;
    let listing = lookup::frame_listing(&state.pool, id).await?;

    tracing::info!(frame_id = id, %kind, detail_replaced = input.detail.is_some(), "Frame updated");

    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// /{Kind}/Delete/{id}
// ---------------------------------------------------------------------------

/// Delete the frame; its detail row and attachments go with it.
pub async fn delete(
    State(state): State<AppState>,
    Extension(kind): Extension<FrameKind>,
    Path(id): Path<DbId>,
    Query(params): Query<ReturnToParams>,
) -> AppResult<Redirect> {
    ensure_frame_of_kind(&state, kind, id).await?;

    if !FrameRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Frame", id).into());
    }

    tracing::info!(frame_id = id, %kind, "Frame deleted");

    Ok(Redirect::to(params.target().as_str()))
}
