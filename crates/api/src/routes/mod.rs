pub mod canvas;
pub mod frame;
pub mod frame_kind;
pub mod health;
pub mod level;
pub mod location;
pub mod panel;

use axum::Router;

use crate::state::AppState;

/// Build the console route tree.
///
/// Route hierarchy:
///
/// ```text
/// /Frame                                           filtered frame list
/// /Frame/Create                                    wizard entry (redirects)
/// /Frame/ForCanvas                                 wizard step 1 (GET, POST)
/// /Frame/ForPanel                                  wizard step 2 (GET, POST)
/// /Frame/ForFrameType                              wizard step 3 (GET, POST)
/// /Frame/{Details,Edit,Delete}/{id}                redirect to the kind controller
/// /Frame/Attach/{id}                               attach a location (GET, POST)
/// /Frame/Detach/{id}                               detach confirmation
/// /Frame/Detach                                    detach (POST)
///
/// /{Kind}/Create                                   create form, create (POST)
/// /{Kind}/Details/{id}                             frame details
/// /{Kind}/Edit/{id}                                edit form, update (PUT)
/// /{Kind}/Delete/{id}                              delete confirmation, delete (POST)
///
/// /Canvas, /Canvas/{id}                            canvases
/// /Panel, /Panel/{id}                              panels (?canvasId filter)
/// /Level, /Level/{id}                              levels
/// /Location, /Location/{id}                        locations (?levelId filter)
/// ```
///
/// `{Kind}` is one of `News`, `Clock`, `Weather`, `Memo`, `Report`,
/// `Picture`, `Video`.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/Frame", frame::router())
        .merge(frame_kind::router())
        .nest("/Canvas", canvas::router())
        .nest("/Panel", panel::router())
        .nest("/Level", level::router())
        .nest("/Location", location::router())
}
