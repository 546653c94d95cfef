//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod committee_repo;
pub mod conference_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod user_repo;

pub use committee_repo::CommitteeRepo;
pub use conference_repo::ConferenceRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::{SubmissionRepo, SubmissionWriteError};
pub use user_repo::UserRepo;
