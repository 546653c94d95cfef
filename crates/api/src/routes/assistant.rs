//! Route definitions for the assistant tool layer.
//!
//! ```text
//! GET  /assistant/tools       -> list_tools
//! POST /assistant/tools/call  -> call_tool
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assistant;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assistant/tools", get(assistant::list_tools))
        .route("/assistant/tools/call", post(assistant::call_tool))
}
