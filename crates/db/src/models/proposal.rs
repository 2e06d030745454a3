//! Proposal entity model and DTOs.

use musren_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::proposal_image::{ImageEntry, ProposalImage};

/// A proposal row from the `proposals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proposal {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub submitter: Option<String>,
    pub region_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub agency_id: Option<DbId>,
    pub period_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// A proposal joined with the names of its reference rows.
///
/// The joined columns are `Option` even when the foreign key is set:
/// reference ids are not validated against existence, so a dangling id
/// joins to NULL rather than erroring.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProposalWithRefs {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub submitter: Option<String>,
    pub region_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub agency_id: Option<DbId>,
    pub period_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub agency_name: Option<String>,
    pub agency_address: Option<String>,
    pub period_year: Option<i32>,
    pub status_name: Option<String>,
}

/// A fully hydrated proposal: joined names plus the ordered image list.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalDetail {
    #[serde(flatten)]
    pub proposal: ProposalWithRefs,
    pub images: Vec<ProposalImage>,
}

/// DTO for the simple (image-less) create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposal {
    pub title: String,
    pub description: Option<String>,
    pub submitter: Option<String>,
    pub region_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub agency_id: Option<DbId>,
    pub period_id: Option<DbId>,
    pub status_id: Option<DbId>,
}

/// DTO for the simple update. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProposal {
    pub title: Option<String>,
    pub description: Option<String>,
    pub submitter: Option<String>,
    pub region_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub agency_id: Option<DbId>,
    pub period_id: Option<DbId>,
    pub status_id: Option<DbId>,
}

/// DTO for the composite create/update: proposal fields plus an optional
/// image list.
///
/// Required fields (`title`, `submitter`, `agency_id`, `period_id`,
/// `status_id`) are declared `Option` so the coordinator can report every
/// missing field in one validation error instead of failing at
/// deserialization.
///
/// Image semantics on update:
/// - `images` absent: leave the existing image set untouched
/// - `images` present + `replace_images`: delete all existing rows, then
///   insert the new list (an empty list therefore clears all images)
/// - `images` present, no replace: append to the existing set
#[derive(Debug, Clone, Deserialize)]
pub struct CompositeSaveInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub submitter: Option<String>,
    pub region_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub agency_id: Option<DbId>,
    pub period_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub images: Option<Vec<ImageEntry>>,
    #[serde(default)]
    pub replace_images: bool,
}

/// Optional filter criteria for the filtered proposal listing.
///
/// `Serialize` as well as `Deserialize`: the handler echoes the active
/// filters back in the response alongside the rows and total count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalFilter {
    pub year: Option<i32>,
    pub status_id: Option<DbId>,
    pub agency_id: Option<DbId>,
    pub search: Option<String>,
}
