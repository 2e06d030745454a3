//! Route definitions for the `/statuses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::proposal_status;
use crate::state::AppState;

/// Routes mounted at `/statuses`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(proposal_status::list).post(proposal_status::create),
    )
}
