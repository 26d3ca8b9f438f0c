//! Route definitions for the `/Location` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/Location`.
///
/// ```text
/// GET    /        -> list (?levelId=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route("/{id}", get(location::get_by_id))
}
