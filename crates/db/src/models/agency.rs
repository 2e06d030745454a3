//! Agency entity model and DTOs.

use musren_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An agency row from the `agencies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Agency {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new agency.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAgency {
    pub name: String,
    pub address: Option<String>,
}

/// DTO for updating an existing agency. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAgency {
    pub name: Option<String>,
    pub address: Option<String>,
}
