//! Repository for the `sessions` table.

use chrono::NaiveTime;
use confera_core::types::{Day, DbId};
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, conference_id, title, topic, session_day, start_time, \
                       end_time, room, created_at, updated_at";

/// Provides CRUD operations for conference sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session under a conference, returning the created row.
    pub async fn create(
        pool: &PgPool,
        conference_id: DbId,
        input: &CreateSession,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (conference_id, title, topic, session_day, start_time, end_time, room)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(conference_id)
            .bind(&input.title)
            .bind(&input.topic)
            .bind(input.session_day)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.room)
            .fetch_one(pool)
            .await
    }

    /// Fetch a session by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a conference's sessions, ordered by day and start time.
    pub async fn list_for_conference(
        pool: &PgPool,
        conference_id: DbId,
    ) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions WHERE conference_id = $1
             ORDER BY session_day, start_time, id"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(conference_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update, returning the updated row if it exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        topic: Option<&str>,
        session_day: Option<Day>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        room: Option<&str>,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                 title = COALESCE($2, title),
                 topic = COALESCE($3, topic),
                 session_day = COALESCE($4, session_day),
                 start_time = COALESCE($5, start_time),
                 end_time = COALESCE($6, end_time),
                 room = COALESCE($7, room),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(title)
            .bind(topic)
            .bind(session_day)
            .bind(start_time)
            .bind(end_time)
            .bind(room)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
