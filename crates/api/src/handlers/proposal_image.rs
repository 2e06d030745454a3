//! Handlers for direct image row CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use musren_core::error::CoreError;
use musren_core::types::DbId;
use musren_db::models::proposal_image::{CreateProposalImage, ProposalImage};
use musren_db::repositories::{ProposalImageRepo, ProposalRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/proposals/{id}/images
pub async fn list_for_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<DbId>,
) -> AppResult<Json<Vec<ProposalImage>>> {
    let images = ProposalImageRepo::list_for_proposal(&state.pool, proposal_id).await?;
    Ok(Json(images))
}

/// POST /api/v1/proposals/{id}/images
pub async fn create(
    State(state): State<AppState>,
    Path(proposal_id): Path<DbId>,
    Json(input): Json<CreateProposalImage>,
) -> AppResult<(StatusCode, Json<ProposalImage>)> {
    // The FK would reject a missing parent anyway; checking first turns
    // that into a 404 instead of a 500.
    if ProposalRepo::find_with_refs(&state.pool, proposal_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id: proposal_id,
        }));
    }
    let image = ProposalImageRepo::create(&state.pool, proposal_id, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// DELETE /api/v1/images/{id} -- hard delete.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProposalImageRepo::hard_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))
    }
}
