//! Route definitions for the `/Canvas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::canvas;
use crate::state::AppState;

/// Routes mounted at `/Canvas`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(canvas::list).post(canvas::create))
        .route("/{id}", get(canvas::get_by_id))
}
