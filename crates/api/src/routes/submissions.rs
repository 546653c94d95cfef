//! Route definitions for submissions.
//!
//! ```text
//! GET   /submissions                            -> list_submissions
//! POST  /submissions                            -> create_submission
//! GET   /submissions/{submission_id}            -> get_submission
//! PATCH /submissions/{submission_id}/status     -> set_submission_status
//! PATCH /submissions/{submission_id}/paid       -> set_submission_paid
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/submissions",
            get(submissions::list_submissions).post(submissions::create_submission),
        )
        .route(
            "/submissions/{submission_id}",
            get(submissions::get_submission),
        )
        .route(
            "/submissions/{submission_id}/status",
            patch(submissions::set_submission_status),
        )
        .route(
            "/submissions/{submission_id}/paid",
            patch(submissions::set_submission_paid),
        )
}
