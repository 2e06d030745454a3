//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod agency_repo;
pub mod period_repo;
pub mod proposal_image_repo;
pub mod proposal_repo;
pub mod proposal_status_repo;

pub use agency_repo::AgencyRepo;
pub use period_repo::PeriodRepo;
pub use proposal_image_repo::ProposalImageRepo;
pub use proposal_repo::{CompositeSaveError, ProposalRepo};
pub use proposal_status_repo::ProposalStatusRepo;
