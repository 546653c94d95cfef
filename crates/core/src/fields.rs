//! Field-level validators shared by the create/update paths.
//!
//! Each validator is a pure function returning `Result<(), CoreError>`;
//! handlers call them before touching the database.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::error::CoreError;
use crate::types::Day;

/// Minimum length of a conference description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 30;

/// Maximum number of comma-separated keywords on a submission.
pub const MAX_KEYWORDS: usize = 10;

/// Email domains accepted for user registration.
pub const ALLOWED_UNIVERSITY_DOMAINS: &[&str] = &["esprit.tn"];

static CONFERENCE_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ ]+$").expect("valid regex"));

static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\- ]+$").expect("valid regex"));

static ROOM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\- ]+$").expect("valid regex"));

static USER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^USER\d{4}$").expect("valid regex"));

/// Conference titles contain only letters (accented Latin included) and spaces.
pub fn validate_conference_title(title: &str) -> Result<(), CoreError> {
    if !CONFERENCE_TITLE_RE.is_match(title) {
        return Err(CoreError::Validation(
            "Title must contain only letters and spaces".to_string(),
        ));
    }
    Ok(())
}

/// Descriptions must carry at least [`MIN_DESCRIPTION_CHARS`] characters.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(CoreError::Validation(format!(
            "Description must be at least {MIN_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(())
}

/// A conference must end strictly after it starts.
pub fn validate_conference_dates(start_date: Day, end_date: Day) -> Result<(), CoreError> {
    if end_date <= start_date {
        return Err(CoreError::Validation(
            "End date must be after start date".to_string(),
        ));
    }
    Ok(())
}

/// At most [`MAX_KEYWORDS`] comma-separated keywords; blanks are ignored.
pub fn validate_keywords(keywords: &str) -> Result<(), CoreError> {
    let count = keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .count();
    if count > MAX_KEYWORDS {
        return Err(CoreError::Validation(format!(
            "Max {MAX_KEYWORDS} keywords allowed (comma-separated)"
        )));
    }
    Ok(())
}

/// Only PDF papers are accepted; the check is on the filename extension.
pub fn validate_paper_filename(filename: &str) -> Result<(), CoreError> {
    let ok = filename
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"));
    if !ok {
        return Err(CoreError::Validation(
            "Paper must be a PDF file".to_string(),
        ));
    }
    Ok(())
}

/// Session rooms contain only letters, digits, spaces, or hyphens.
pub fn validate_room(room: &str) -> Result<(), CoreError> {
    if !ROOM_RE.is_match(room) {
        return Err(CoreError::Validation(
            "Room must contain only letters, digits, spaces or hyphens".to_string(),
        ));
    }
    Ok(())
}

/// A session day must fall within its conference's date range (inclusive).
pub fn validate_session_day(
    session_day: Day,
    conference_start: Day,
    conference_end: Day,
) -> Result<(), CoreError> {
    if session_day < conference_start || session_day > conference_end {
        return Err(CoreError::Validation(
            "Session day must be within the conference dates".to_string(),
        ));
    }
    Ok(())
}

/// A session must end strictly after it starts.
pub fn validate_session_times(start_time: NaiveTime, end_time: NaiveTime) -> Result<(), CoreError> {
    if end_time <= start_time {
        return Err(CoreError::Validation(
            "End time must be after start time".to_string(),
        ));
    }
    Ok(())
}

/// First and last names: letters, spaces, and hyphens only.
pub fn validate_person_name(name: &str) -> Result<(), CoreError> {
    if !PERSON_NAME_RE.is_match(name) {
        return Err(CoreError::Validation(
            "Only letters, spaces, and hyphens are allowed".to_string(),
        ));
    }
    Ok(())
}

/// Registration emails must belong to an allowed university domain
/// (exact match or subdomain).
pub fn validate_university_email(email: &str) -> Result<(), CoreError> {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return Err(CoreError::Validation("Invalid email format".to_string()));
    };
    if local.is_empty() || domain.is_empty() {
        return Err(CoreError::Validation("Invalid email format".to_string()));
    }
    let domain = domain.to_ascii_lowercase();
    let allowed = ALLOWED_UNIVERSITY_DOMAINS
        .iter()
        .any(|d| domain == *d || domain.ends_with(&format!(".{d}")));
    if !allowed {
        return Err(CoreError::Validation(
            "Email must be a university domain (e.g. @esprit.tn)".to_string(),
        ));
    }
    Ok(())
}

/// User ids are `USER` followed by exactly 4 digits.
pub fn validate_user_id(user_id: &str) -> Result<(), CoreError> {
    if !USER_ID_RE.is_match(user_id) {
        return Err(CoreError::Validation(
            "user_id must match 'USER' + 4 digits, e.g. USER1234".to_string(),
        ));
    }
    Ok(())
}
