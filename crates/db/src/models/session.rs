//! Conference session model and DTOs.

use chrono::NaiveTime;
use confera_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub conference_id: DbId,
    pub title: String,
    pub topic: String,
    pub session_day: Day,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a session under a conference.
#[derive(Debug, Deserialize)]
pub struct CreateSession {
    pub title: String,
    pub topic: String,
    pub session_day: Day,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
}

/// DTO for updating a session. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSession {
    pub title: Option<String>,
    pub topic: Option<String>,
    pub session_day: Option<Day>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room: Option<String>,
}
