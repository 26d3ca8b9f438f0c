//! Route definitions for the per-kind frame controllers.

use axum::routing::get;
use axum::{Extension, Router};

use signage_core::frame_kind::FrameKind;

use crate::handlers::frame_kind;
use crate::state::AppState;

/// Routes for a single kind, relative to `/{Kind}`.
///
/// ```text
/// GET, POST  /Create          -> create_form, create
/// GET        /Details/{id}    -> details
/// GET, PUT   /Edit/{id}       -> details, update
/// GET, POST  /Delete/{id}     -> details, delete
/// ```
fn kind_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/Create",
            get(frame_kind::create_form).post(frame_kind::create),
        )
        .route("/Details/{id}", get(frame_kind::details))
        .route(
            "/Edit/{id}",
            get(frame_kind::details).put(frame_kind::update),
        )
        .route(
            "/Delete/{id}",
            get(frame_kind::details).post(frame_kind::delete),
        )
}

/// One copy of [`kind_routes`] per [`FrameKind`], each tagged with its kind.
pub fn router() -> Router<AppState> {
    FrameKind::ALL.iter().fold(Router::new(), |router, &kind| {
        router.nest(kind.route_base(), kind_routes().layer(Extension(kind)))
    })
}
