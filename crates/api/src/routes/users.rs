//! Route definitions for users.
//!
//! ```text
//! GET  /users                        -> list_users
//! POST /users                        -> create_user
//! GET  /users/{user_id}              -> get_user
//! GET  /users/{user_id}/submissions  -> list_user_submissions
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{user_id}", get(users::get_user))
        .route(
            "/users/{user_id}/submissions",
            get(users::list_user_submissions),
        )
}
