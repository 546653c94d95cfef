//! Handlers for user registration and lookup.
//!
//! There is no login or session handling here; passwords are hashed at
//! registration time and never leave the database layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use confera_core::error::CoreError;
use confera_core::fields::{validate_person_name, validate_university_email};
use confera_db::models::submission::SubmissionResponse;
use confera_db::models::user::{CreateUser, UserResponse, UserRole};
use confera_db::repositories::{SubmissionRepo, UserRepo};
use rand::SeedableRng;

use crate::error::{AppError, AppResult};
use crate::password::{hash_password, validate_password_strength};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_all(&state.pool).await?;
    let data: Vec<UserResponse> = users.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/users
///
/// Register a user. The `USER####` id is generated server-side.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    validate_person_name(&input.first_name)?;
    validate_person_name(&input.last_name)?;
    validate_university_email(&input.email)?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &input.username,
        &input.email,
        &password_hash,
        input.role.unwrap_or(UserRole::Participant),
        &input.first_name,
        &input.last_name,
        &mut rand::rngs::StdRng::from_os_rng(),
    )
    .await?;

    tracing::info!(user_id = %user.user_id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /api/v1/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, &user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id.clone(),
        }))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// GET /api/v1/users/{user_id}/submissions
pub async fn list_user_submissions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    UserRepo::find_by_id(&state.pool, &user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id.clone(),
        }))?;

    let submissions = SubmissionRepo::list(&state.pool, None, Some(&user_id), None).await?;
    let data: Vec<SubmissionResponse> = submissions.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data }))
}
