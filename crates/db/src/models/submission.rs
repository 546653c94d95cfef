//! Submission entity model and DTOs.

use confera_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "submission_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

/// A row from the `submissions` table.
///
/// After insert only `status` and `paid` ever change; the conference and
/// author are never reassigned and no update path exposes them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub submission_id: String,
    pub conference_id: DbId,
    pub author_id: String,
    pub title: String,
    pub abstract_text: String,
    pub keywords: String,
    pub paper_filename: String,
    pub status: SubmissionStatus,
    pub submission_date: Day,
    pub paid: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Submission {
    /// Registration is valid once the paper is accepted and the fee paid.
    pub fn is_registration_valid(&self) -> bool {
        self.status == SubmissionStatus::Accepted && self.paid
    }
}

/// Submission representation for API responses, including the derived
/// registration flag.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    #[serde(flatten)]
    pub submission: Submission,
    pub registration_valid: bool,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        let registration_valid = submission.is_registration_valid();
        Self {
            submission,
            registration_valid,
        }
    }
}

/// DTO for creating a submission.
///
/// `submission_date` defaults to the current date when omitted.
#[derive(Debug, Deserialize)]
pub struct CreateSubmission {
    pub conference_id: DbId,
    pub author_id: String,
    pub title: String,
    pub abstract_text: String,
    pub keywords: String,
    pub paper_filename: String,
    pub submission_date: Option<Day>,
}

/// DTO for `PATCH /submissions/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetSubmissionStatus {
    pub status: SubmissionStatus,
}

/// DTO for `PATCH /submissions/{id}/paid`.
#[derive(Debug, Deserialize)]
pub struct SetSubmissionPaid {
    pub paid: bool,
}

/// Query parameters for `GET /submissions`.
#[derive(Debug, Deserialize)]
pub struct SubmissionListParams {
    pub conference_id: Option<DbId>,
    pub author_id: Option<String>,
    pub status: Option<SubmissionStatus>,
}
