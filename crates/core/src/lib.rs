//! Shared domain types and errors for the musren backend.

pub mod error;
pub mod types;
