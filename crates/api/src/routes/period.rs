//! Route definitions for the `/periods` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::period;
use crate::state::AppState;

/// Routes mounted at `/periods`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(period::list).post(period::create))
}
