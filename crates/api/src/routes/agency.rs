//! Route definitions for the `/agencies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::agency;
use crate::state::AppState;

/// Routes mounted at `/agencies`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(agency::list).post(agency::create))
        .route("/{id}", get(agency::get_by_id))
}
