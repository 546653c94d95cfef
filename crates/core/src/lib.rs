//! Pure domain logic for the conference management backend.
//!
//! Nothing in this crate touches the database or the network; the api
//! crate wires these checks into the write path.

pub mod eligibility;
pub mod error;
pub mod fields;
pub mod ids;
pub mod types;
