pub mod agency;
pub mod health;
pub mod period;
pub mod proposal;
pub mod proposal_status;

use axum::routing::delete;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /proposals                     list, create
/// /proposals/filtered            filtered list + total count
/// /proposals/composite           composite create (proposal + images)
/// /proposals/composite/{id}      composite update
/// /proposals/{id}                get, update, soft delete
/// /proposals/{id}/images         list, attach
/// /images/{id}                   hard delete
/// /agencies                      list, create
/// /agencies/{id}                 get
/// /statuses                      list, create
/// /periods                       list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/proposals", proposal::router())
        .nest("/agencies", agency::router())
        .nest("/statuses", proposal_status::router())
        .nest("/periods", period::router())
        .route("/images/{id}", delete(handlers::proposal_image::delete))
}
