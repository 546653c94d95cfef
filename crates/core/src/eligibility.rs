//! Submission eligibility rules.
//!
//! Two independent business rules gate every submission write:
//!
//! 1. The target conference must not have started yet.
//! 2. An author may submit to at most [`DAILY_DISTINCT_CONFERENCE_LIMIT`]
//!    *distinct* conferences per calendar day. Submitting again to a
//!    conference already in that day's set never counts against the cap.
//!
//! [`check_eligibility`] is a pure decision function: it never queries,
//! persists, or logs, and "today" is passed in explicitly so the rules
//! are testable. The db layer is responsible for loading the author's
//! other same-day submissions and for serializing the check-then-insert
//! sequence per (author, day); see `SubmissionRepo::create`.

use std::collections::HashSet;

use crate::types::{Day, DbId};

/// Maximum number of distinct conferences an author may submit to on a
/// single calendar day.
pub const DAILY_DISTINCT_CONFERENCE_LIMIT: usize = 3;

/// A submission being checked before it is written.
///
/// `submission_id` is `Some` on update so the candidate's own persisted
/// row is never counted against it.
#[derive(Debug, Clone)]
pub struct CandidateSubmission<'a> {
    pub submission_id: Option<&'a str>,
    pub author_id: &'a str,
    pub conference_id: DbId,
    pub conference_start_date: Day,
    /// Day the submission is dated. Defaults to the reference date when
    /// unset (i.e. on first insert).
    pub submission_day: Option<Day>,
}

/// The slice of an already-persisted submission the rules care about.
#[derive(Debug, Clone)]
pub struct ExistingSubmission {
    pub submission_id: String,
    pub conference_id: DbId,
    pub submission_day: Day,
}

/// Why a candidate submission was refused.
///
/// Both variants are user-facing and recoverable; the caller translates
/// them into a rejected request, never a retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("Submission allowed only for future conferences (conference {conference_id} starts {start_date})")]
    ConferenceNotUpcoming { conference_id: DbId, start_date: Day },

    #[error("Daily limit reached: {limit} different conferences per day")]
    DailyConferenceLimitExceeded { day: Day, limit: usize },
}

/// Decide whether `candidate` may be persisted.
///
/// Rules are evaluated in declared order and the first failure wins, so
/// [`EligibilityError::ConferenceNotUpcoming`] takes precedence when both
/// rules would fail.
pub fn check_eligibility(
    candidate: &CandidateSubmission<'_>,
    existing: &[ExistingSubmission],
    reference_date: Day,
) -> Result<(), EligibilityError> {
    // Rule 1: the conference's start date must be strictly in the future.
    if candidate.conference_start_date <= reference_date {
        return Err(EligibilityError::ConferenceNotUpcoming {
            conference_id: candidate.conference_id,
            start_date: candidate.conference_start_date,
        });
    }

    // Rule 2: cap on distinct conferences per author per day.
    let day = candidate.submission_day.unwrap_or(reference_date);
    let distinct_conferences: HashSet<DbId> = existing
        .iter()
        .filter(|s| s.submission_day == day)
        .filter(|s| candidate.submission_id != Some(s.submission_id.as_str()))
        .map(|s| s.conference_id)
        .collect();

    // A repeat submission to a conference already in the day's set is
    // always allowed; the cap is on distinct conferences, not count.
    if distinct_conferences.contains(&candidate.conference_id) {
        return Ok(());
    }

    if distinct_conferences.len() >= DAILY_DISTINCT_CONFERENCE_LIMIT {
        return Err(EligibilityError::DailyConferenceLimitExceeded {
            day,
            limit: DAILY_DISTINCT_CONFERENCE_LIMIT,
        });
    }

    Ok(())
}
