//! Repository for the `submissions` table.
//!
//! `create` is the one write path that runs the eligibility rules. The
//! cap on distinct conferences per (author, day) is a read-aggregate-
//! then-conditionally-write sequence, so the whole thing runs inside a
//! transaction holding an advisory lock on the (author, day) key: two
//! concurrent attempts for the same author and day serialize instead of
//! both reading a count of 2 and both inserting.

use confera_core::eligibility::{
    check_eligibility, CandidateSubmission, EligibilityError, ExistingSubmission,
};
use confera_core::ids::new_submission_id;
use confera_core::types::{Day, DbId};
use rand::Rng;
use sqlx::{PgConnection, PgPool};

use crate::models::submission::{CreateSubmission, Submission, SubmissionStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "submission_id, conference_id, author_id, title, abstract_text, \
                       keywords, paper_filename, status, submission_date, paid, \
                       created_at, updated_at";

/// Attempts at generating an unused submission id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// Failure modes of the submission write path.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionWriteError {
    #[error(transparent)]
    Ineligible(#[from] EligibilityError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides CRUD operations for submissions, including the serialized
/// eligibility-checked insert.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Validate and insert a new submission.
    ///
    /// `conference_start_date` must belong to `input.conference_id`;
    /// `reference_date` is "today" for the temporal rule and the default
    /// submission day. The random source is caller-supplied so tests can
    /// seed it.
    pub async fn create<R: Rng + ?Sized>(
        pool: &PgPool,
        input: &CreateSubmission,
        conference_start_date: Day,
        reference_date: Day,
        rng: &mut R,
    ) -> Result<Submission, SubmissionWriteError> {
        let day = input.submission_date.unwrap_or(reference_date);

        let mut tx = pool.begin().await?;

        // Serialize concurrent attempts for the same (author, day). The
        // lock is transaction-scoped and released on commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1 || '@' || $2::text))")
            .bind(&input.author_id)
            .bind(day)
            .execute(&mut *tx)
            .await?;
        tracing::debug!(author_id = %input.author_id, %day, "Acquired submission write lock");

        let existing = Self::list_for_author_on_day(&mut tx, &input.author_id, day).await?;

        let candidate = CandidateSubmission {
            submission_id: None,
            author_id: &input.author_id,
            conference_id: input.conference_id,
            conference_start_date,
            submission_day: Some(day),
        };
        if let Err(rule) = check_eligibility(&candidate, &existing, reference_date) {
            tracing::debug!(
                author_id = %input.author_id,
                conference_id = input.conference_id,
                %day,
                %rule,
                "Submission refused by eligibility rules"
            );
            return Err(rule.into());
        }

        let submission_id = Self::reserve_submission_id(&mut tx, rng).await?;

        let query = format!(
            "INSERT INTO submissions (submission_id, conference_id, author_id, title,
                                      abstract_text, keywords, paper_filename, submission_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let submission = sqlx::query_as::<_, Submission>(&query)
            .bind(&submission_id)
            .bind(input.conference_id)
            .bind(&input.author_id)
            .bind(&input.title)
            .bind(&input.abstract_text)
            .bind(&input.keywords)
            .bind(&input.paper_filename)
            .bind(day)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(submission)
    }

    /// Generate a submission id not yet present in the table.
    ///
    /// The token space is 26^8 so a collision is already unlikely; the
    /// bounded retry keeps the loop from spinning if something is badly
    /// wrong (e.g. a broken random source).
    async fn reserve_submission_id<R: Rng + ?Sized>(
        conn: &mut PgConnection,
        rng: &mut R,
    ) -> Result<String, sqlx::Error> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = new_submission_id(rng);
            let taken: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM submissions WHERE submission_id = $1)")
                    .bind(&id)
                    .fetch_one(&mut *conn)
                    .await?;
            if !taken {
                return Ok(id);
            }
        }
        Err(sqlx::Error::Protocol(
            "exhausted submission id generation attempts".into(),
        ))
    }

    /// Load the slice of an author's submissions on `day` that the
    /// eligibility rules aggregate over.
    async fn list_for_author_on_day(
        conn: &mut PgConnection,
        author_id: &str,
        day: Day,
    ) -> Result<Vec<ExistingSubmission>, sqlx::Error> {
        let rows: Vec<(String, DbId, Day)> = sqlx::query_as(
            "SELECT submission_id, conference_id, submission_date
             FROM submissions
             WHERE author_id = $1 AND submission_date = $2",
        )
        .bind(author_id)
        .bind(day)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(submission_id, conference_id, submission_day)| ExistingSubmission {
                submission_id,
                conference_id,
                submission_day,
            })
            .collect())
    }

    /// Fetch a submission by id.
    pub async fn find_by_id(
        pool: &PgPool,
        submission_id: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE submission_id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(submission_id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions, optionally filtered by conference, author, and status.
    pub async fn list(
        pool: &PgPool,
        conference_id: Option<DbId>,
        author_id: Option<&str>,
        status: Option<SubmissionStatus>,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE ($1::bigint IS NULL OR conference_id = $1)
               AND ($2::varchar IS NULL OR author_id = $2)
               AND ($3::submission_status IS NULL OR status = $3)
             ORDER BY created_at, submission_id"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(conference_id)
            .bind(author_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Move a submission to a new review status. Returns the updated row
    /// if it exists.
    pub async fn set_status(
        pool: &PgPool,
        submission_id: &str,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET status = $2, updated_at = NOW()
             WHERE submission_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(submission_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Set the paid flag. Returns the updated row if it exists.
    pub async fn set_paid(
        pool: &PgPool,
        submission_id: &str,
        paid: bool,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET paid = $2, updated_at = NOW()
             WHERE submission_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(submission_id)
            .bind(paid)
            .fetch_optional(pool)
            .await
    }
}
