//! Repository for the `agencies` table.

use musren_core::types::DbId;
use sqlx::PgPool;

use crate::models::agency::{Agency, CreateAgency, UpdateAgency};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, created_at, updated_at";

/// Provides CRUD operations for agencies.
pub struct AgencyRepo;

impl AgencyRepo {
    /// Insert a new agency, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAgency) -> Result<Agency, sqlx::Error> {
        let query = format!(
            "INSERT INTO agencies (name, address) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agency>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find an agency by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Agency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies WHERE id = $1");
        sqlx::query_as::<_, Agency>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all agencies ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Agency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies ORDER BY name");
        sqlx::query_as::<_, Agency>(&query).fetch_all(pool).await
    }

    /// Update an agency. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAgency,
    ) -> Result<Option<Agency>, sqlx::Error> {
        let query = format!(
            "UPDATE agencies SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agency>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }
}
