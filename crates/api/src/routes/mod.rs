pub mod assistant;
pub mod conferences;
pub mod health;
pub mod sessions;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /conferences                                 list, create
/// /conferences/{id}                            get, update, delete
/// /conferences/{conference_id}/sessions        list, create
/// /conferences/{conference_id}/committee       list, add
/// /sessions/{id}                               get, update, delete
/// /committee/{id}                              remove
///
/// /users                                       list, register
/// /users/{user_id}                             get
/// /users/{user_id}/submissions                 list
///
/// /submissions                                 list, create (eligibility-checked)
/// /submissions/{submission_id}                 get
/// /submissions/{submission_id}/status          set review status (PATCH)
/// /submissions/{submission_id}/paid            set payment flag (PATCH)
///
/// /assistant/tools                             tool descriptors
/// /assistant/tools/call                        run a read-only tool (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(conferences::router())
        .merge(sessions::router())
        .merge(users::router())
        .merge(submissions::router())
        .merge(assistant::router())
}
