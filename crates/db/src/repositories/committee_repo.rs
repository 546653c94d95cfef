//! Repository for the `committee_members` table.

use confera_core::types::DbId;
use sqlx::PgPool;

use crate::models::committee::{CommitteeMember, CreateCommitteeMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, conference_id, user_id, committee_role, date_joined, \
                       created_at, updated_at";

/// Provides CRUD operations for organizing committee memberships.
pub struct CommitteeRepo;

impl CommitteeRepo {
    /// Add a user to a conference's committee, returning the created row.
    ///
    /// A duplicate (conference, user) pair violates
    /// `uq_committee_members_conference_user` and surfaces as a 409 at
    /// the API boundary.
    pub async fn create(
        pool: &PgPool,
        conference_id: DbId,
        input: &CreateCommitteeMember,
    ) -> Result<CommitteeMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO committee_members (conference_id, user_id, committee_role, date_joined)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(conference_id)
            .bind(&input.user_id)
            .bind(input.committee_role)
            .bind(input.date_joined)
            .fetch_one(pool)
            .await
    }

    /// List a conference's committee, chairs first.
    pub async fn list_for_conference(
        pool: &PgPool,
        conference_id: DbId,
    ) -> Result<Vec<CommitteeMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM committee_members WHERE conference_id = $1
             ORDER BY committee_role, date_joined, id"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(conference_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a committee membership. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM committee_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
