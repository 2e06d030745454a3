//! HTTP handlers, one module per resource.

pub mod agency;
pub mod period;
pub mod proposal;
pub mod proposal_image;
pub mod proposal_status;
