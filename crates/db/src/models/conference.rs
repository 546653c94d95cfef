//! Conference entity model and DTOs.

use confera_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Thematic track a conference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "conference_theme", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConferenceTheme {
    CsAi,
    SciEng,
    SocEdu,
    Inter,
}

impl ConferenceTheme {
    /// Human-readable label, used by the assistant tool layer.
    pub fn display_name(self) -> &'static str {
        match self {
            ConferenceTheme::CsAi => "Computer Science & Artificial Intelligence",
            ConferenceTheme::SciEng => "Science & Engineering",
            ConferenceTheme::SocEdu => "Social Sciences & Education",
            ConferenceTheme::Inter => "Interdisciplinary Themes",
        }
    }
}

/// A row from the `conferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Conference {
    pub id: DbId,
    pub title: String,
    pub theme: ConferenceTheme,
    /// Venue (building, campus).
    pub place: String,
    /// City / country.
    pub location: String,
    pub start_date: Day,
    pub end_date: Day,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a conference.
#[derive(Debug, Deserialize)]
pub struct CreateConference {
    pub title: String,
    pub theme: ConferenceTheme,
    pub place: String,
    pub location: String,
    pub start_date: Day,
    pub end_date: Day,
    pub description: String,
}

/// DTO for updating a conference. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateConference {
    pub title: Option<String>,
    pub theme: Option<ConferenceTheme>,
    pub place: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<Day>,
    pub end_date: Option<Day>,
    pub description: Option<String>,
}
