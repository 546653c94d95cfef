//! Handlers for conference sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use confera_core::error::CoreError;
use confera_core::fields::{validate_room, validate_session_day, validate_session_times};
use confera_core::types::DbId;
use confera_db::models::session::{CreateSession, UpdateSession};
use confera_db::repositories::{ConferenceRepo, SessionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/conferences/{conference_id}/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(conference_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for an unknown conference rather than an empty list.
    ConferenceRepo::find_by_id(&state.pool, conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: conference_id.to_string(),
        }))?;

    let sessions = SessionRepo::list_for_conference(&state.pool, conference_id).await?;

    Ok(Json(DataResponse { data: sessions }))
}

/// POST /api/v1/conferences/{conference_id}/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Path(conference_id): Path<DbId>,
    Json(input): Json<CreateSession>,
) -> AppResult<impl IntoResponse> {
    let conference = ConferenceRepo::find_by_id(&state.pool, conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: conference_id.to_string(),
        }))?;

    validate_room(&input.room)?;
    validate_session_day(input.session_day, conference.start_date, conference.end_date)?;
    validate_session_times(input.start_time, input.end_time)?;

    let session = SessionRepo::create(&state.pool, conference_id, &input).await?;

    tracing::info!(session_id = session.id, conference_id, "Session created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: session }))
}

/// PUT /api/v1/sessions/{id}
///
/// Partial update; day and time changes are validated against the
/// resulting combined schedule.
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSession>,
) -> AppResult<impl IntoResponse> {
    let current = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: id.to_string(),
        }))?;

    let conference = ConferenceRepo::find_by_id(&state.pool, current.conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: current.conference_id.to_string(),
        }))?;

    if let Some(room) = &input.room {
        validate_room(room)?;
    }
    let session_day = input.session_day.unwrap_or(current.session_day);
    validate_session_day(session_day, conference.start_date, conference.end_date)?;
    let start_time = input.start_time.unwrap_or(current.start_time);
    let end_time = input.end_time.unwrap_or(current.end_time);
    validate_session_times(start_time, end_time)?;

    let session = SessionRepo::update(
        &state.pool,
        id,
        input.title.as_deref(),
        input.topic.as_deref(),
        input.session_day,
        input.start_time,
        input.end_time,
        input.room.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Session",
        id: id.to_string(),
    }))?;

    tracing::info!(session_id = id, "Session updated");

    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SessionRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: id.to_string(),
        }));
    }

    tracing::info!(session_id = id, "Session deleted");

    Ok(StatusCode::NO_CONTENT)
}
