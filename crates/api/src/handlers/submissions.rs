//! Handlers for paper submissions.
//!
//! `create_submission` is the write path gated by the eligibility rules:
//! it resolves the target conference, then hands the candidate to
//! `SubmissionRepo::create`, which runs the rules inside a transaction
//! serialized per (author, day). The reference date is the server's
//! current UTC date.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use confera_core::error::CoreError;
use confera_core::fields::{validate_keywords, validate_paper_filename};
use confera_db::models::submission::{
    CreateSubmission, SetSubmissionPaid, SetSubmissionStatus, SubmissionListParams,
    SubmissionResponse,
};
use confera_db::repositories::{ConferenceRepo, SubmissionRepo, UserRepo};
use rand::SeedableRng;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/submissions
///
/// List submissions, optionally filtered by conference, author, and status.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<SubmissionListParams>,
) -> AppResult<impl IntoResponse> {
    let submissions = SubmissionRepo::list(
        &state.pool,
        params.conference_id,
        params.author_id.as_deref(),
        params.status,
    )
    .await?;

    let data: Vec<SubmissionResponse> = submissions.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/submissions
pub async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<impl IntoResponse> {
    validate_keywords(&input.keywords)?;
    validate_paper_filename(&input.paper_filename)?;

    UserRepo::find_by_id(&state.pool, &input.author_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.author_id.clone(),
        }))?;

    let conference = ConferenceRepo::find_by_id(&state.pool, input.conference_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conference",
            id: input.conference_id.to_string(),
        }))?;

    let reference_date = Utc::now().date_naive();
    let submission = SubmissionRepo::create(
        &state.pool,
        &input,
        conference.start_date,
        reference_date,
        &mut rand::rngs::StdRng::from_os_rng(),
    )
    .await?;

    tracing::info!(
        submission_id = %submission.submission_id,
        conference_id = submission.conference_id,
        author_id = %submission.author_id,
        "Submission created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmissionResponse::from(submission),
        }),
    ))
}

/// GET /api/v1/submissions/{submission_id}
pub async fn get_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::find_by_id(&state.pool, &submission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: submission_id.clone(),
        }))?;

    Ok(Json(DataResponse {
        data: SubmissionResponse::from(submission),
    }))
}

/// PATCH /api/v1/submissions/{submission_id}/status
pub async fn set_submission_status(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
    Json(input): Json<SetSubmissionStatus>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::set_status(&state.pool, &submission_id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: submission_id.clone(),
        }))?;

    tracing::info!(submission_id = %submission_id, status = ?input.status, "Submission status changed");

    Ok(Json(DataResponse {
        data: SubmissionResponse::from(submission),
    }))
}

/// PATCH /api/v1/submissions/{submission_id}/paid
pub async fn set_submission_paid(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
    Json(input): Json<SetSubmissionPaid>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::set_paid(&state.pool, &submission_id, input.paid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: submission_id.clone(),
        }))?;

    tracing::info!(submission_id = %submission_id, paid = input.paid, "Submission payment flag changed");

    Ok(Json(DataResponse {
        data: SubmissionResponse::from(submission),
    }))
}
