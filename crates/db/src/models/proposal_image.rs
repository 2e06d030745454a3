//! Proposal image model and DTOs.
//!
//! Image bytes never pass through this API; rows store the upload path
//! and an optional caption.

use musren_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An image row from the `proposal_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProposalImage {
    pub id: DbId,
    pub proposal_id: DbId,
    pub file_path: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching an image to an existing proposal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposalImage {
    pub file_path: String,
    pub caption: Option<String>,
}

/// One entry in a composite save's image list.
///
/// `file_path` is `Option` so the coordinator can report which entry is
/// malformed instead of letting deserialization reject the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub file_path: Option<String>,
    pub caption: Option<String>,
}
