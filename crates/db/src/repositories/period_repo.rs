//! Repository for the `periods` lookup table.

use musren_core::types::DbId;
use sqlx::PgPool;

use crate::models::period::{CreatePeriod, Period};

const COLUMNS: &str = "id, year, created_at, updated_at";

/// Provides CRUD operations for budget periods.
pub struct PeriodRepo;

impl PeriodRepo {
    /// Insert a new period, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePeriod) -> Result<Period, sqlx::Error> {
        let query = format!("INSERT INTO periods (year) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Period>(&query)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find a period by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Period>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM periods WHERE id = $1");
        sqlx::query_as::<_, Period>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all periods, most recent year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Period>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM periods ORDER BY year DESC");
        sqlx::query_as::<_, Period>(&query).fetch_all(pool).await
    }
}
