//! Route definitions for the `/Panel` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::panel;
use crate::state::AppState;

/// Routes mounted at `/Panel`.
///
/// ```text
/// GET    /        -> list (?canvasId=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(panel::list).post(panel::create))
        .route("/{id}", get(panel::get_by_id))
}
