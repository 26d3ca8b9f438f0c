#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use signage_api::config::ServerConfig;
use signage_api::router::build_app_router;
use signage_api::state::AppState;
use signage_core::types::DbId;
use signage_db::models::canvas::CreateCanvas;
use signage_core::frame_kind::FrameKind;
use signage_db::models::frame::{
    ClockDetail, CreateFrame, FrameDetail, MemoDetail, NewsDetail, PictureDetail, ReportDetail,
    VideoDetail, WeatherDetail,
};
use signage_db::models::level::CreateLevel;
use signage_db::models::location::CreateLocation;
use signage_db::models::panel::CreatePanel;
use signage_db::repositories::{CanvasRepo, FrameRepo, LevelRepo, LocationRepo, PanelRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        wizard_ttl_secs: 300,
        db_max_connections: 5,
    }
}

/// Shared state for tests that need the wizard store to outlive one request.
pub fn test_state(pool: PgPool) -> AppState {
    AppState::new(pool, test_config())
}

/// Build the full application router, with the production middleware stack,
/// around the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(test_state(pool))
}

pub fn build_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST an urlencoded form, e.g. `"canvasId=3&panelId=0"`.
pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("response has no Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// The `wizard` token carried by a redirect target, if any.
pub fn wizard_token(target: &str) -> Option<String> {
    target
        .split_once('?')
        .and_then(|(_, query)| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("wizard="))
        })
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn seed_canvas(pool: &PgPool, name: &str) -> DbId {
    let input = CreateCanvas {
        name: name.to_string(),
        width: 1920,
        height: 1080,
    };
    CanvasRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_panel(pool: &PgPool, canvas_id: DbId, name: &str) -> DbId {
    let input = CreatePanel {
        canvas_id,
        name: name.to_string(),
        pos_top: None,
        pos_left: None,
        width: 640,
        height: 360,
    };
    PanelRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_level(pool: &PgPool, name: &str) -> DbId {
    let input = CreateLevel {
        name: name.to_string(),
    };
    LevelRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_location(pool: &PgPool, level_id: DbId, name: &str) -> DbId {
    let input = CreateLocation {
        level_id,
        name: name.to_string(),
    };
    LocationRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_frame(pool: &PgPool, panel_id: DbId, detail: FrameDetail) -> DbId {
    let input = CreateFrame {
        panel_id,
        duration_secs: None,
        sort_order: None,
        begins_on: None,
        ends_on: None,
        detail,
    };
    FrameRepo::create(pool, &input).await.unwrap().id
}

pub fn clock_detail() -> FrameDetail {
    FrameDetail::Clock(ClockDetail {
        show_date: true,
        show_seconds: false,
        is_analog: false,
    })
}

pub fn memo_detail(body: &str) -> FrameDetail {
    FrameDetail::Memo(MemoDetail {
        subject: None,
        body: body.to_string(),
    })
}

/// A valid detail for `kind` whose values all differ from the column defaults.
pub fn sample_detail(kind: FrameKind) -> FrameDetail {
    match kind {
        FrameKind::News => FrameDetail::News(NewsDetail {
            feed_url: "https://news.example/rss".to_string(),
            item_count: 12,
        }),
        FrameKind::Clock => FrameDetail::Clock(ClockDetail {
            show_date: false,
            show_seconds: true,
            is_analog: true,
        }),
        FrameKind::Weather => FrameDetail::Weather(WeatherDetail {
            city: "Bergen".to_string(),
            temperature_unit: "f".to_string(),
        }),
        FrameKind::Memo => FrameDetail::Memo(MemoDetail {
            subject: Some("Parking".to_string()),
            body: "Lot B closed on Friday".to_string(),
        }),
        FrameKind::Report => FrameDetail::Report(ReportDetail {
            server_url: "https://reports.example/ReportServer".to_string(),
            report_path: "/Sales/Daily".to_string(),
        }),
        FrameKind::Picture => FrameDetail::Picture(PictureDetail {
            image_url: "https://img.example/lobby.png".to_string(),
            scaling_mode: "stretch".to_string(),
        }),
        FrameKind::Video => FrameDetail::Video(VideoDetail {
            video_url: "https://video.example/intro.mp4".to_string(),
            play_muted: false,
            auto_loop: false,
        }),
    }
}
