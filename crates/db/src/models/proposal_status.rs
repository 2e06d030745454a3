//! Proposal status lookup-table model and DTOs.

use musren_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A status row from the `proposal_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProposalStatus {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new proposal status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposalStatus {
    pub name: String,
}
