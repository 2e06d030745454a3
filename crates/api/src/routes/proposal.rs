//! Route definitions for the `/proposals` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{proposal, proposal_image};
use crate::state::AppState;

/// Routes mounted at `/proposals`.
///
/// The static segments (`/filtered`, `/composite`) are declared alongside
/// the `{id}` captures; axum prefers the literal match.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(proposal::list).post(proposal::create))
        .route("/filtered", get(proposal::list_filtered))
        .route("/composite", post(proposal::create_composite))
        .route("/composite/{id}", put(proposal::update_composite))
        .route(
            "/{id}",
            get(proposal::get_by_id)
                .put(proposal::update)
                .delete(proposal::delete),
        )
        .route(
            "/{id}/images",
            get(proposal_image::list_for_proposal).post(proposal_image::create),
        )
}
