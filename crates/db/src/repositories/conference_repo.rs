//! Repository for the `conferences` table.

use confera_core::types::DbId;
use sqlx::PgPool;

use crate::models::conference::{Conference, ConferenceTheme, CreateConference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, theme, place, location, start_date, end_date, \
                       description, created_at, updated_at";

/// Provides CRUD and filtered-query operations for conferences.
pub struct ConferenceRepo;

impl ConferenceRepo {
    /// Insert a new conference, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateConference) -> Result<Conference, sqlx::Error> {
        let query = format!(
            "INSERT INTO conferences (title, theme, place, location, start_date, end_date, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(&input.title)
            .bind(input.theme)
            .bind(&input.place)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Fetch a conference by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences WHERE id = $1");
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all conferences ordered by start date.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences ORDER BY start_date, id");
        sqlx::query_as::<_, Conference>(&query).fetch_all(pool).await
    }

    /// List conferences of a given theme, ordered by start date.
    pub async fn list_by_theme(
        pool: &PgPool,
        theme: ConferenceTheme,
    ) -> Result<Vec<Conference>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM conferences WHERE theme = $1 ORDER BY start_date, id");
        sqlx::query_as::<_, Conference>(&query)
            .bind(theme)
            .fetch_all(pool)
            .await
    }

    /// Find conferences whose title contains `fragment` (case-insensitive).
    ///
    /// Used by the assistant tool layer, which must distinguish "no match"
    /// from "ambiguous match", so all hits are returned.
    pub async fn find_by_title_fragment(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Conference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM conferences WHERE title ILIKE '%' || $1 || '%' ORDER BY start_date, id"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(fragment)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update, returning the updated row if it exists.
    ///
    /// COALESCE keeps the stored value for fields the caller left unset.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        theme: Option<ConferenceTheme>,
        place: Option<&str>,
        location: Option<&str>,
        start_date: Option<confera_core::types::Day>,
        end_date: Option<confera_core::types::Day>,
        description: Option<&str>,
    ) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!(
            "UPDATE conferences SET
                 title = COALESCE($2, title),
                 theme = COALESCE($3, theme),
                 place = COALESCE($4, place),
                 location = COALESCE($5, location),
                 start_date = COALESCE($6, start_date),
                 end_date = COALESCE($7, end_date),
                 description = COALESCE($8, description),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .bind(title)
            .bind(theme)
            .bind(place)
            .bind(location)
            .bind(start_date)
            .bind(end_date)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a conference. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM conferences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
