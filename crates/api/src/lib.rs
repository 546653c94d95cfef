//! Confera API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! the assistant tool layer) so integration tests and the binary
//! entrypoint can both access them.

pub mod assistant;
pub mod config;
pub mod error;
pub mod handlers;
pub mod password;
pub mod response;
pub mod routes;
pub mod state;
