//! Handlers for conference CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use confera_core::error::CoreError;
use confera_core::fields::{
    validate_conference_dates, validate_conference_title, validate_description,
};
use confera_core::types::DbId;
use confera_db::models::conference::{CreateConference, UpdateConference};
use confera_db::repositories::ConferenceRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/conferences
pub async fn list_conferences(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let conferences = ConferenceRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: conferences }))
}

/// POST /api/v1/conferences
pub async fn create_conference(
    State(state): State<AppState>,
    Json(input): Json<CreateConference>,
) -> AppResult<impl IntoResponse> {
    validate_conference_title(&input.title)?;
    validate_description(&input.description)?;
    validate_conference_dates(input.start_date, input.end_date)?;

    let conference = ConferenceRepo::create(&state.pool, &input).await?;

    tracing::info!(conference_id = conference.id, title = %conference.title, "Conference created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: conference })))
}

/// GET /api/v1/conferences/{id}
pub async fn get_conference(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let conference = ConferenceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: conference }))
}

/// PUT /api/v1/conferences/{id}
///
/// Partial update; date changes are validated against the resulting
/// combined range, not just the fields present in the request.
pub async fn update_conference(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateConference>,
) -> AppResult<impl IntoResponse> {
    let current = ConferenceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: id.to_string(),
        }))?;

    if let Some(title) = &input.title {
        validate_conference_title(title)?;
    }
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    let start_date = input.start_date.unwrap_or(current.start_date);
    let end_date = input.end_date.unwrap_or(current.end_date);
    validate_conference_dates(start_date, end_date)?;

    let conference = ConferenceRepo::update(
        &state.pool,
        id,
        input.title.as_deref(),
        input.theme,
        input.place.as_deref(),
        input.location.as_deref(),
        input.start_date,
        input.end_date,
        input.description.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Conference",
        id: id.to_string(),
    }))?;

    tracing::info!(conference_id = id, "Conference updated");

    Ok(Json(DataResponse { data: conference }))
}

/// DELETE /api/v1/conferences/{id}
pub async fn delete_conference(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ConferenceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: id.to_string(),
        }));
    }

    tracing::info!(conference_id = id, "Conference deleted");

    Ok(StatusCode::NO_CONTENT)
}
