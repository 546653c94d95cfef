//! Integration tests for the session endpoints: scheduling validation
//! against the parent conference and session lifecycle.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{body_json, delete, get, post, send_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_conference(app: Router) -> i64 {
    let response = post(
        app,
        "/api/v1/conferences",
        &json!({
            "title": "Systems Week",
            "theme": "SCI_ENG",
            "place": "Main Campus",
            "location": "Tunis",
            "start_date": "2099-07-01",
            "end_date": "2099-07-03",
            "description": "A long enough description for the minimum length rule",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

fn session_body() -> serde_json::Value {
    json!({
        "title": "Opening Keynote",
        "topic": "Distributed systems",
        "session_day": "2099-07-01",
        "start_time": "09:00:00",
        "end_time": "10:30:00",
        "room": "A-101",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn session_is_created_and_listed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let conf = seed_conference(app.clone()).await;

    let response = post(
        app.clone(),
        &format!("/api/v1/conferences/{conf}/sessions"),
        &session_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["room"], "A-101");

    let listed = body_json(
        get(app, &format!("/api/v1/conferences/{conf}/sessions")).await,
    )
    .await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["title"], "Opening Keynote");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn session_outside_conference_dates_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let conf = seed_conference(app.clone()).await;

    let mut body = session_body();
    body["session_day"] = json!("2099-07-04");
    let response = post(
        app,
        &format!("/api/v1/conferences/{conf}/sessions"),
        &body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn session_end_must_follow_start(pool: PgPool) {
    let app = common::build_test_app(pool);
    let conf = seed_conference(app.clone()).await;

    let mut body = session_body();
    body["end_time"] = json!("09:00:00");
    let response = post(
        app.clone(),
        &format!("/api/v1/conferences/{conf}/sessions"),
        &body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = session_body();
    body["room"] = json!("A_101!");
    let response = post(
        app,
        &format!("/api/v1/conferences/{conf}/sessions"),
        &body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn session_update_validates_combined_schedule(pool: PgPool) {
    let app = common::build_test_app(pool);
    let conf = seed_conference(app.clone()).await;

    let created = body_json(
        post(
            app.clone(),
            &format!("/api/v1/conferences/{conf}/sessions"),
            &session_body(),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Moving the start past the stored end time must fail even though
    // the end time is not part of the request.
    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/sessions/{id}"),
        &json!({ "start_time": "11:00:00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/sessions/{id}"),
        &json!({ "topic": "Consensus protocols", "room": "B-202" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["topic"], "Consensus protocols");
    assert_eq!(json["data"]["room"], "B-202");
    assert_eq!(json["data"]["title"], "Opening Keynote");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleted_session_is_gone(pool: PgPool) {
    let app = common::build_test_app(pool);
    let conf = seed_conference(app.clone()).await;

    let created = body_json(
        post(
            app.clone(),
            &format!("/api/v1/conferences/{conf}/sessions"),
            &session_body(),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/sessions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/sessions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &format!("/api/v1/sessions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_sessions_of_unknown_conference_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/conferences/999999/sessions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
