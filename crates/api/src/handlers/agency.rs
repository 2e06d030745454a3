//! Handlers for the `/agencies` lookup resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use musren_core::error::CoreError;
use musren_core::types::DbId;
use musren_db::models::agency::{Agency, CreateAgency};
use musren_db::repositories::AgencyRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/agencies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Agency>>> {
    let agencies = AgencyRepo::list(&state.pool).await?;
    Ok(Json(agencies))
}

/// GET /api/v1/agencies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Agency>> {
    let agency = AgencyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Agency",
            id,
        }))?;
    Ok(Json(agency))
}

/// POST /api/v1/agencies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAgency>,
) -> AppResult<(StatusCode, Json<Agency>)> {
    let agency = AgencyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(agency)))
}
