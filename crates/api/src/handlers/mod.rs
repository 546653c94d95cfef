//! HTTP request handlers, one module per resource.

pub mod assistant;
pub mod committee;
pub mod conferences;
pub mod sessions;
pub mod submissions;
pub mod users;
