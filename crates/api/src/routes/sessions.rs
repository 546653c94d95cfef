//! Route definitions for conference sessions.
//!
//! ```text
//! GET    /conferences/{conference_id}/sessions -> list_sessions
//! POST   /conferences/{conference_id}/sessions -> create_session
//! GET    /sessions/{id}                        -> get_session
//! PUT    /sessions/{id}                        -> update_session
//! DELETE /sessions/{id}                        -> delete_session
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/conferences/{conference_id}/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/sessions/{id}",
            get(sessions::get_session)
                .put(sessions::update_session)
                .delete(sessions::delete_session),
        )
}
