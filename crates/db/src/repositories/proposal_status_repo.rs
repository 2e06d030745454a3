//! Repository for the `proposal_statuses` lookup table.

use musren_core::types::DbId;
use sqlx::PgPool;

use crate::models::proposal_status::{CreateProposalStatus, ProposalStatus};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for proposal statuses.
pub struct ProposalStatusRepo;

impl ProposalStatusRepo {
    /// Insert a new status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProposalStatus,
    ) -> Result<ProposalStatus, sqlx::Error> {
        let query =
            format!("INSERT INTO proposal_statuses (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProposalStatus>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a status by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProposalStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proposal_statuses WHERE id = $1");
        sqlx::query_as::<_, ProposalStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all statuses ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProposalStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proposal_statuses ORDER BY name");
        sqlx::query_as::<_, ProposalStatus>(&query)
            .fetch_all(pool)
            .await
    }
}
