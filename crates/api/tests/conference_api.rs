//! Integration tests for the conference CRUD endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, post, send_json};
use serde_json::json;
use sqlx::PgPool;

fn conference_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "theme": "CS_AI",
        "place": "Main Campus",
        "location": "Tunis",
        "start_date": "2025-07-01",
        "end_date": "2025-07-03",
        "description": "A long enough description for the minimum length rule",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_fetch_conference(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app.clone(),
        "/api/v1/conferences",
        &conference_body("Rust Days"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["title"], "Rust Days");
    assert_eq!(created["data"]["theme"], "CS_AI");

    let response = get(app.clone(), &format!("/api/v1/conferences/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(get(app, "/api/v1/conferences").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_invalid_title(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = conference_body("Rust Days");
    body["title"] = json!("ICML 2025");

    let response = post(app, "/api/v1/conferences", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_short_description(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = conference_body("Rust Days");
    body["description"] = json!("too short");

    let response = post(app, "/api/v1/conferences", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_end_date_before_start_date(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = conference_body("Rust Days");
    body["end_date"] = json!("2025-06-30");

    let response = post(app, "/api/v1/conferences", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_validates_combined_date_range(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post(
            app.clone(),
            "/api/v1/conferences",
            &conference_body("Rust Days"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Moving the start date past the stored end date must fail even
    // though the request carries no end date.
    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/conferences/{id}"),
        &json!({ "start_date": "2025-07-10" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/conferences/{id}"),
        &json!({ "title": "Systems Days" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["title"], "Systems Days");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_conference_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post(
            app.clone(),
            "/api/v1/conferences",
            &conference_body("Rust Days"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/conferences/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/conferences/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
