//! Handlers for organizing committee membership.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use confera_core::error::CoreError;
use confera_core::types::DbId;
use confera_db::models::committee::CreateCommitteeMember;
use confera_db::repositories::{CommitteeRepo, ConferenceRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/conferences/{conference_id}/committee
pub async fn list_committee(
    State(state): State<AppState>,
    Path(conference_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ConferenceRepo::find_by_id(&state.pool, conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: conference_id.to_string(),
        }))?;

    let members = CommitteeRepo::list_for_conference(&state.pool, conference_id).await?;

    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/conferences/{conference_id}/committee
///
/// Adding the same user twice yields a 409 via the unique constraint.
pub async fn add_committee_member(
    State(state): State<AppState>,
    Path(conference_id): Path<DbId>,
    Json(input): Json<CreateCommitteeMember>,
) -> AppResult<impl IntoResponse> {
    ConferenceRepo::find_by_id(&state.pool, conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: conference_id.to_string(),
        }))?;

    UserRepo::find_by_id(&state.pool, &input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id.clone(),
        }))?;

    let member = CommitteeRepo::create(&state.pool, conference_id, &input).await?;

    tracing::info!(
        committee_member_id = member.id,
        conference_id,
        user_id = %member.user_id,
        "Committee member added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// DELETE /api/v1/committee/{id}
pub async fn remove_committee_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CommitteeRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CommitteeMember",
            id: id.to_string(),
        }));
    }

    tracing::info!(committee_member_id = id, "Committee member removed");

    Ok(StatusCode::NO_CONTENT)
}
