//! Handlers for the `/statuses` lookup resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use musren_db::models::proposal_status::{CreateProposalStatus, ProposalStatus};
use musren_db::repositories::ProposalStatusRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/statuses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProposalStatus>>> {
    let statuses = ProposalStatusRepo::list(&state.pool).await?;
    Ok(Json(statuses))
}

/// POST /api/v1/statuses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProposalStatus>,
) -> AppResult<(StatusCode, Json<ProposalStatus>)> {
    let status = ProposalStatusRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(status)))
}
