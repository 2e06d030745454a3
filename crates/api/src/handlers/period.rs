//! Handlers for the `/periods` lookup resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use musren_db::models::period::{CreatePeriod, Period};
use musren_db::repositories::PeriodRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/periods
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Period>>> {
    let periods = PeriodRepo::list(&state.pool).await?;
    Ok(Json(periods))
}

/// POST /api/v1/periods
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePeriod>,
) -> AppResult<(StatusCode, Json<Period>)> {
    let period = PeriodRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(period)))
}
