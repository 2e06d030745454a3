//! Handlers for the `/proposals` resource, including the composite
//! create/update endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use musren_core::error::CoreError;
use musren_core::types::DbId;
use musren_db::models::proposal::{
    CompositeSaveInput, CreateProposal, ProposalDetail, ProposalFilter, ProposalWithRefs,
    UpdateProposal,
};
use musren_db::repositories::ProposalRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for the filtered listing: rows, total count under the same
/// predicate, and the filter set echoed back.
#[derive(Debug, Serialize)]
pub struct FilteredProposals {
    pub data: Vec<ProposalWithRefs>,
    pub total: i64,
    pub filters: ProposalFilter,
}

/// GET /api/v1/proposals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProposalWithRefs>>> {
    let proposals = ProposalRepo::list(&state.pool).await?;
    Ok(Json(proposals))
}

/// GET /api/v1/proposals/filtered
pub async fn list_filtered(
    State(state): State<AppState>,
    Query(filter): Query<ProposalFilter>,
) -> AppResult<Json<FilteredProposals>> {
    let (data, total) = ProposalRepo::list_filtered(&state.pool, &filter).await?;
    Ok(Json(FilteredProposals {
        data,
        total,
        filters: filter,
    }))
}

/// GET /api/v1/proposals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProposalDetail>> {
    let detail = ProposalRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id,
        }))?;
    Ok(Json(detail))
}

/// POST /api/v1/proposals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProposal>,
) -> AppResult<(StatusCode, Json<ProposalWithRefs>)> {
    let proposal = ProposalRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(proposal)))
}

/// PUT /api/v1/proposals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProposal>,
) -> AppResult<Json<ProposalWithRefs>> {
    let proposal = ProposalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id,
        }))?;
    Ok(Json(proposal))
}

/// DELETE /api/v1/proposals/{id} -- soft delete.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProposalRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id,
        }))
    }
}

/// POST /api/v1/proposals/composite
pub async fn create_composite(
    State(state): State<AppState>,
    Json(input): Json<CompositeSaveInput>,
) -> AppResult<(StatusCode, Json<ProposalDetail>)> {
    let detail = ProposalRepo::save_composite(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/v1/proposals/composite/{id}
pub async fn update_composite(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CompositeSaveInput>,
) -> AppResult<Json<ProposalDetail>> {
    let detail = ProposalRepo::update_composite(&state.pool, id, &input).await?;
    Ok(Json(detail))
}
