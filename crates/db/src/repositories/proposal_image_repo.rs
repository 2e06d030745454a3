//! Repository for the `proposal_images` table.
//!
//! Images have no soft-delete: direct deletes remove the row, and hard
//! deleting a proposal cascades to its images.

use musren_core::types::DbId;
use sqlx::PgPool;

use crate::models::proposal_image::{CreateProposalImage, ProposalImage};

const COLUMNS: &str = "id, proposal_id, file_path, caption, created_at, updated_at";

/// Provides CRUD operations for proposal images.
pub struct ProposalImageRepo;

impl ProposalImageRepo {
    /// Attach an image to a proposal, returning the created row.
    pub async fn create(
        pool: &PgPool,
        proposal_id: DbId,
        input: &CreateProposalImage,
    ) -> Result<ProposalImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO proposal_images (proposal_id, file_path, caption)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProposalImage>(&query)
            .bind(proposal_id)
            .bind(&input.file_path)
            .bind(&input.caption)
            .fetch_one(pool)
            .await
    }

    /// List all images for a proposal in insertion order.
    ///
    /// Rows inserted inside one transaction share a `created_at` value
    /// (Postgres `NOW()` is transaction-stable), so `id` breaks the tie.
    pub async fn list_for_proposal(
        pool: &PgPool,
        proposal_id: DbId,
    ) -> Result<Vec<ProposalImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proposal_images
             WHERE proposal_id = $1
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ProposalImage>(&query)
            .bind(proposal_id)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete an image by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proposal_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
