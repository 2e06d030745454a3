//! Budget period lookup-table model and DTOs.

use musren_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A period row from the `periods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Period {
    pub id: DbId,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new period.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePeriod {
    pub year: i32,
}
