//! Route definitions for the `/Level` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::level;
use crate::state::AppState;

/// Routes mounted at `/Level`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(level::list).post(level::create))
        .route("/{id}", get(level::get_by_id))
}
