//! Integration tests for user registration and lookup.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post};
use serde_json::json;
use sqlx::PgPool;

fn user_body(username: &str) -> serde_json::Value {
    json!({
        "username": username,
        "email": format!("{username}@esprit.tn"),
        "password": "correct-horse-battery-staple",
        "first_name": "Ada",
        "last_name": "Lovelace",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn registration_returns_generated_id_without_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(app.clone(), "/api/v1/users", &user_body("ada")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let user_id = json["data"]["user_id"].as_str().unwrap().to_string();
    assert!(user_id.starts_with("USER"));
    assert_eq!(user_id.len(), 8);
    assert_eq!(json["data"]["role"], "participant");
    assert!(json["data"].get("password_hash").is_none());

    let fetched = body_json(get(app, &format!("/api/v1/users/{user_id}")).await).await;
    assert_eq!(fetched["data"]["username"], "ada");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn registration_rejects_non_university_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = user_body("ada");
    body["email"] = json!("ada@gmail.com");
    let response = post(app.clone(), "/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    // Domain matching is on dot boundaries, not substrings.
    let mut body = user_body("eve");
    body["email"] = json!("eve@notesprit.tn");
    let response = post(app, "/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn registration_rejects_bad_names_and_weak_passwords(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = user_body("ada");
    body["first_name"] = json!("Ada123");
    let response = post(app.clone(), "/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = user_body("ada");
    body["password"] = json!("short");
    let response = post(app, "/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_is_a_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(app.clone(), "/api/v1/users", &user_body("ada")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut body = user_body("ada");
    body["email"] = json!("ada.lovelace@esprit.tn");
    let response = post(app, "/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn organizer_role_is_honoured(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = user_body("grace");
    body["role"] = json!("organizer");
    let response = post(app, "/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["role"], "organizer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn user_listing_includes_registered_users(pool: PgPool) {
    let app = common::build_test_app(pool);

    post(app.clone(), "/api/v1/users", &user_body("ada")).await;
    post(app.clone(), "/api/v1/users", &user_body("grace")).await;

    let listed = body_json(get(app, "/api/v1/users").await).await;
    let users = listed["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submissions_listing_for_unknown_user_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/users/USER0000/submissions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submissions_listing_starts_empty(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(post(app.clone(), "/api/v1/users", &user_body("ada")).await).await;
    let user_id = created["data"]["user_id"].as_str().unwrap().to_string();

    let listed = body_json(
        get(app, &format!("/api/v1/users/{user_id}/submissions")).await,
    )
    .await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}
