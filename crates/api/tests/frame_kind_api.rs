//! HTTP-level tests for the per-kind frame controllers.

mod common;

use axum::http::StatusCode;
use common::{body_json, clock_detail, get, location, memo_detail, post_json, put_json};
use serde_json::json;
use signage_db::repositories::FrameRepo;
use sqlx::PgPool;

async fn seed_panel(pool: &PgPool) -> i64 {
    let canvas = common::seed_canvas(pool, "Lobby").await;
    common::seed_panel(pool, canvas, "Left").await
}

// ---------------------------------------------------------------------------
// Test: Create returns 201 with listing (POST /{Kind}/Create)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_listing(pool: PgPool) {
    let panel = seed_panel(&pool).await;

    let body = json!({
        "panel_id": panel,
        "duration_secs": 15,
        "detail": {"frame_type": "News", "feed_url": "https://news.example/rss", "item_count": 3}
    });
    let response = post_json(common::build_test_app(pool), "/News/Create", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["frame_type"], "News");
    assert_eq!(json["data"]["duration_secs"], 15);
    assert_eq!(json["data"]["sort_order"], 0);
    assert_eq!(json["data"]["panel_name"], "Left");
    assert_eq!(json["data"]["canvas_name"], "Lobby");
    assert_eq!(json["data"]["detail"]["item_count"], 3);
}

// ---------------------------------------------------------------------------
// Test: Create defaults duration (POST /{Kind}/Create)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_duration(pool: PgPool) {
    let panel = seed_panel(&pool).await;

    let body = json!({
        "panel_id": panel,
        "detail": {"frame_type": "Memo", "subject": null, "body": "Fire drill at noon"}
    });
    let json = body_json(post_json(common::build_test_app(pool), "/Memo/Create", body).await).await;
    assert_eq!(json["data"]["duration_secs"], 60);
}

// ---------------------------------------------------------------------------
// Test: Create rejects detail of another kind (POST /{Kind}/Create)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_detail_of_another_kind(pool: PgPool) {
    let panel = seed_panel(&pool).await;

    let body = json!({
        "panel_id": panel,
        "detail": {"frame_type": "Clock", "show_date": true, "show_seconds": true, "is_analog": false}
    });
    let response = post_json(common::build_test_app(pool), "/Video/Create", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: Create validates detail fields (POST /{Kind}/Create)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_validates_detail_fields(pool: PgPool) {
    let panel = seed_panel(&pool).await;

    let body = json!({
        "panel_id": panel,
        "detail": {"frame_type": "Picture", "image_url": "https://img.example/a.png", "scaling_mode": "zoom"}
    });
    let response = post_json(common::build_test_app(pool), "/Picture/Create", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("scaling_mode"));
}

// ---------------------------------------------------------------------------
// Test: Create rejects backwards schedule (POST /{Kind}/Create)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_backwards_schedule(pool: PgPool) {
    let panel = seed_panel(&pool).await;

    let body = json!({
        "panel_id": panel,
        "begins_on": "2026-05-02T00:00:00Z",
        "ends_on": "2026-05-01T00:00:00Z",
        "detail": {"frame_type": "Clock", "show_date": true, "show_seconds": true, "is_analog": false}
    });
    let response = post_json(common::build_test_app(pool), "/Clock/Create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: Create on missing panel returns 404 (POST /{Kind}/Create)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_on_missing_panel_returns_404(pool: PgPool) {
    let body = json!({
        "panel_id": 999999,
        "detail": {"frame_type": "Clock", "show_date": true, "show_seconds": true, "is_analog": false}
    });
    let response = post_json(common::build_test_app(pool), "/Clock/Create", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Details serve the listing for matching kind (GET /{Kind}/{Details,Edit,Delete}/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn details_serve_the_listing_for_matching_kind(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, memo_detail("Hello")).await;

    for action in ["Details", "Edit", "Delete"] {
        let uri = format!("/Memo/{action}/{frame}");
        let response = get(common::build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], frame);
        assert_eq!(json["data"]["detail"]["body"], "Hello");
    }
}

// ---------------------------------------------------------------------------
// Test: Details under the wrong kind return 404 (GET /{Kind}/{Details,Edit,Delete}/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn details_under_the_wrong_kind_return_404(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, memo_detail("Hello")).await;

    let response = get(common::build_test_app(pool), &format!("/Clock/Details/{frame}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Update changes scalars and keeps detail (PUT /{Kind}/Edit/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_scalars_and_keeps_detail(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, clock_detail()).await;

    let uri = format!("/Clock/Edit/{frame}");
    let body = json!({"duration_secs": 30, "sort_order": 2});
    let response = put_json(common::build_test_app(pool), &uri, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["duration_secs"], 30);
    assert_eq!(json["data"]["sort_order"], 2);
    assert_eq!(json["data"]["detail"]["show_date"], true);
}

// ---------------------------------------------------------------------------
// Test: Update replaces detail (PUT /{Kind}/Edit/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_detail(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, clock_detail()).await;

    let uri = format!("/Clock/Edit/{frame}");
    let body = json!({
        "detail": {"frame_type": "Clock", "show_date": false, "show_seconds": true, "is_analog": true}
    });
    let json = body_json(put_json(common::build_test_app(pool), &uri, body).await).await;

    assert_eq!(json["data"]["detail"]["show_date"], false);
    assert_eq!(json["data"]["detail"]["is_analog"], true);
}

// ---------------------------------------------------------------------------
// Test: Update clears schedule bound given as null (PUT /{Kind}/Edit/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_clears_schedule_bound_given_as_null(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let body = json!({
        "panel_id": panel,
        "begins_on": "2026-05-01T00:00:00Z",
        "ends_on": "2026-05-31T00:00:00Z",
        "detail": {"frame_type": "Clock", "show_date": true, "show_seconds": true, "is_analog": false}
    });
    let created = body_json(post_json(common::build_test_app(pool.clone()), "/Clock/Create", body).await).await;
    let frame = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/Clock/Edit/{frame}");

    let json = body_json(put_json(common::build_test_app(pool.clone()), &uri, json!({"sort_order": 1})).await).await;
    assert!(json["data"]["ends_on"].is_string(), "absent field keeps the bound");

    let response = put_json(common::build_test_app(pool), &uri, json!({"ends_on": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["ends_on"].is_null());
    assert!(json["data"]["begins_on"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Update rejects schedule ending before stored start (PUT /{Kind}/Edit/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_schedule_ending_before_stored_start(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let body = json!({
        "panel_id": panel,
        "begins_on": "2026-05-10T00:00:00Z",
        "detail": {"frame_type": "Clock", "show_date": true, "show_seconds": true, "is_analog": false}
    });
    let created = body_json(post_json(common::build_test_app(pool.clone()), "/Clock/Create", body).await).await;
    let frame = created["data"]["id"].as_i64().unwrap();

    let uri = format!("/Clock/Edit/{frame}");
    let body = json!({"ends_on": "2026-05-01T00:00:00Z"});
    let response = put_json(common::build_test_app(pool), &uri, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: Update rejects detail of another kind (PUT /{Kind}/Edit/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_detail_of_another_kind(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, clock_detail()).await;

    let uri = format!("/Clock/Edit/{frame}");
    let body = json!({"detail": {"frame_type": "Memo", "subject": null, "body": "x"}});
    let response = put_json(common::build_test_app(pool), &uri, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: Delete removes the frame and redirects (POST /{Kind}/Delete/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_frame_and_redirects(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, clock_detail()).await;
    let level = common::seed_level(&pool, "Ground").await;
    let spot = common::seed_location(&pool, level, "Reception").await;
    FrameRepo::attach_location(&pool, frame, spot).await.unwrap();

    let uri = format!("/Clock/Delete/{frame}?returnTo=%2FFrame%3FpanelId%3D{panel}");
    let response = post_json(common::build_test_app(pool.clone()), &uri, json!({})).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/Frame?panelId={panel}"));
    assert!(FrameRepo::find_by_id(&pool, frame).await.unwrap().is_none());

    let response = get(common::build_test_app(pool), &format!("/Frame/Details/{frame}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Delete under the wrong kind returns 404 (POST /{Kind}/Delete/{id})
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_under_the_wrong_kind_returns_404(pool: PgPool) {
    let panel = seed_panel(&pool).await;
    let frame = common::seed_frame(&pool, panel, clock_detail()).await;

    let uri = format!("/News/Delete/{frame}");
    let response = post_json(common::build_test_app(pool.clone()), &uri, json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(FrameRepo::find_by_id(&pool, frame).await.unwrap().is_some());
}
