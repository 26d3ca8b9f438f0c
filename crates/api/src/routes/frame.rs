//! Route definitions for the `/Frame` controller.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{frame, frame_location, frame_wizard};
use crate::state::AppState;

/// Routes mounted at `/Frame`.
///
/// ```text
/// GET        /                      -> index
/// GET        /Index                 -> index
/// GET        /Create                -> frame_wizard::create
/// GET, POST  /ForCanvas             -> for_canvas, choose_canvas
/// GET, POST  /ForPanel              -> for_panel, choose_panel
/// GET, POST  /ForFrameType          -> for_frame_type, choose_frame_type
/// GET        /Details/{id}          -> details (redirect)
/// GET        /Edit/{id}             -> edit (redirect)
/// GET        /Delete/{id}           -> delete (redirect)
/// GET, POST  /Attach/{id}           -> attach_form, attach
/// GET        /Detach/{id}           -> detach_form
/// POST       /Detach                -> detach
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(frame::index))
        .route("/Index", get(frame::index))
        .route("/Create", get(frame_wizard::create))
        .route(
            "/ForCanvas",
            get(frame_wizard::for_canvas).post(frame_wizard::choose_canvas),
        )
        .route(
            "/ForPanel",
            get(frame_wizard::for_panel).post(frame_wizard::choose_panel),
        )
        .route(
            "/ForFrameType",
            get(frame_wizard::for_frame_type).post(frame_wizard::choose_frame_type),
        )
        .route("/Details/{id}", get(frame::details))
        .route("/Edit/{id}", get(frame::edit))
        .route("/Delete/{id}", get(frame::delete))
        .route(
            "/Attach/{id}",
            get(frame_location::attach_form).post(frame_location::attach),
        )
        .route("/Detach/{id}", get(frame_location::detach_form))
        .route("/Detach", post(frame_location::detach))
}
