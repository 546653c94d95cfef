//! Route definitions for conferences and their nested resources.
//!
//! ```text
//! GET    /conferences                            -> list_conferences
//! POST   /conferences                            -> create_conference
//! GET    /conferences/{id}                       -> get_conference
//! PUT    /conferences/{id}                       -> update_conference
//! DELETE /conferences/{id}                       -> delete_conference
//! GET    /conferences/{conference_id}/committee  -> list_committee
//! POST   /conferences/{conference_id}/committee  -> add_committee_member
//! DELETE /committee/{id}                         -> remove_committee_member
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{committee, conferences};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/conferences",
            get(conferences::list_conferences).post(conferences::create_conference),
        )
        .route(
            "/conferences/{id}",
            get(conferences::get_conference)
                .put(conferences::update_conference)
                .delete(conferences::delete_conference),
        )
        .route(
            "/conferences/{conference_id}/committee",
            get(committee::list_committee).post(committee::add_committee_member),
        )
        .route("/committee/{id}", delete(committee::remove_committee_member))
}
