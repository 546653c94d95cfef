//! Organizing committee membership model and DTOs.

use confera_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role a user holds on a conference's organizing committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "committee_role", rename_all = "kebab-case")]
pub enum CommitteeRole {
    Chair,
    CoChair,
    Member,
}

/// A row from the `committee_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitteeMember {
    pub id: DbId,
    pub conference_id: DbId,
    pub user_id: String,
    pub committee_role: CommitteeRole,
    pub date_joined: Day,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a committee member to a conference.
#[derive(Debug, Deserialize)]
pub struct CreateCommitteeMember {
    pub user_id: String,
    pub committee_role: CommitteeRole,
    pub date_joined: Day,
}
