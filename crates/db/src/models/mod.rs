//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Update DTOs where the resource supports them

pub mod committee;
pub mod conference;
pub mod session;
pub mod submission;
pub mod user;
