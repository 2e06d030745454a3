use crate::types::DbId;

/// Domain-level error type shared across crates.
///
/// Repositories return `sqlx::Error` directly; this enum covers the
/// errors that carry domain meaning (a missing entity, a rejected input)
/// so handlers can map them to HTTP statuses without string matching.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist (or is soft-deleted).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The input failed a presence or shape check.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
