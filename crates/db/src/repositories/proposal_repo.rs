//! Repository for the `proposals` table, including the composite save
//! flows that write a proposal together with its image list in one
//! transaction.

use musren_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::proposal::{
    CompositeSaveInput, CreateProposal, Proposal, ProposalDetail, ProposalFilter,
    ProposalWithRefs, UpdateProposal,
};
use crate::models::proposal_image::ImageEntry;
use crate::repositories::ProposalImageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, submitter, region_code, latitude, longitude, \
     agency_id, period_id, status_id, created_at, updated_at, deleted_at";

/// Proposal columns plus the joined reference names.
const JOINED_COLUMNS: &str = "\
    p.id, p.title, p.description, p.submitter, p.region_code, p.latitude, p.longitude, \
    p.agency_id, p.period_id, p.status_id, p.created_at, p.updated_at, p.deleted_at, \
    a.name AS agency_name, a.address AS agency_address, \
    pe.year AS period_year, st.name AS status_name";

/// LEFT JOINs so dangling reference ids yield NULL names instead of
/// dropping the row.
const JOINED_FROM: &str = "\
    FROM proposals p \
    LEFT JOIN agencies a ON p.agency_id = a.id \
    LEFT JOIN periods pe ON p.period_id = pe.id \
    LEFT JOIN proposal_statuses st ON p.status_id = st.id";

/// Error union for the composite save flows.
///
/// Any variant other than `Db` raised after the transaction opens forces
/// a rollback before it is returned; `Db` errors propagate with `?`, and
/// dropping the uncommitted transaction rolls back as well.
#[derive(Debug, thiserror::Error)]
pub enum CompositeSaveError {
    /// One or more required proposal fields are missing or blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The image entry at this position has no usable `file_path`.
    #[error("image at index {0} missing file_path")]
    ImageMissingPath(usize),

    /// The target proposal does not exist or is soft-deleted.
    #[error("proposal {0} not found")]
    NotFound(DbId),

    /// An underlying store failure.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides CRUD and composite-save operations for proposals.
pub struct ProposalRepo;

impl ProposalRepo {
    /// Insert a new proposal (no images), returning the joined row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProposal,
    ) -> Result<ProposalWithRefs, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO proposals
                (title, description, submitter, region_code, latitude, longitude,
                 agency_id, period_id, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.submitter)
        .bind(&input.region_code)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.agency_id)
        .bind(input.period_id)
        .bind(input.status_id)
        .fetch_one(pool)
        .await?;

        let query = format!("SELECT {JOINED_COLUMNS} {JOINED_FROM} WHERE p.id = $1");
        sqlx::query_as::<_, ProposalWithRefs>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all proposals with joined names, most recent first.
    /// Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProposalWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} {JOINED_FROM}
             WHERE p.deleted_at IS NULL
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProposalWithRefs>(&query)
            .fetch_all(pool)
            .await
    }

    /// List proposals matching the given filter set, plus the total count
    /// under the identical predicate.
    ///
    /// All criteria are optional and combine conjunctively. The search
    /// term matches title, submitter, or description case-insensitively
    /// as a substring. Soft-deleted rows are always excluded.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &ProposalFilter,
    ) -> Result<(Vec<ProposalWithRefs>, i64), sqlx::Error> {
        // A NULL bind deactivates its guard, so one static statement
        // covers every filter combination.
        const PREDICATE: &str = "\
            WHERE p.deleted_at IS NULL \
              AND ($1::INT IS NULL OR pe.year = $1) \
              AND ($2::BIGINT IS NULL OR p.status_id = $2) \
              AND ($3::BIGINT IS NULL OR p.agency_id = $3) \
              AND ($4::TEXT IS NULL \
                   OR p.title ILIKE $4 \
                   OR p.submitter ILIKE $4 \
                   OR p.description ILIKE $4)";

        let search = filter.search.as_deref().map(|s| format!("%{s}%"));

        let query =
            format!("SELECT {JOINED_COLUMNS} {JOINED_FROM} {PREDICATE} ORDER BY p.created_at DESC");
        let rows = sqlx::query_as::<_, ProposalWithRefs>(&query)
            .bind(filter.year)
            .bind(filter.status_id)
            .bind(filter.agency_id)
            .bind(&search)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) {JOINED_FROM} {PREDICATE}");
        let (total,): (i64,) = sqlx::query_as(&count_query)
            .bind(filter.year)
            .bind(filter.status_id)
            .bind(filter.agency_id)
            .bind(&search)
            .fetch_one(pool)
            .await?;

        Ok((rows, total))
    }

    /// Find a proposal with joined names. Excludes soft-deleted rows.
    pub async fn find_with_refs(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProposalWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} {JOINED_FROM}
             WHERE p.id = $1 AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, ProposalWithRefs>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a fully hydrated proposal: joined names plus the ordered
    /// image list. Excludes soft-deleted rows.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProposalDetail>, sqlx::Error> {
        let Some(proposal) = Self::find_with_refs(pool, id).await? else {
            return Ok(None);
        };
        let images = ProposalImageRepo::list_for_proposal(pool, id).await?;
        Ok(Some(ProposalDetail { proposal, images }))
    }

    /// Find a proposal by ID, including soft-deleted rows. Administrative
    /// access; the flat row carries `deleted_at` for inspection.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Proposal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proposals WHERE id = $1");
        sqlx::query_as::<_, Proposal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a proposal. Only non-`None` fields in `input` are applied.
    /// Images are untouched.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProposal,
    ) -> Result<Option<ProposalWithRefs>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE proposals SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                submitter = COALESCE($4, submitter),
                region_code = COALESCE($5, region_code),
                latitude = COALESCE($6, latitude),
                longitude = COALESCE($7, longitude),
                agency_id = COALESCE($8, agency_id),
                period_id = COALESCE($9, period_id),
                status_id = COALESCE($10, status_id),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.submitter)
        .bind(&input.region_code)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.agency_id)
        .bind(input.period_id)
        .bind(input.status_id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_with_refs(pool, id).await
    }

    /// Soft-delete a proposal by ID. Returns `true` if a row was marked
    /// deleted. Image rows persist.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE proposals SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a proposal by ID. Image rows cascade.
    /// Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proposals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Composite save flows
    // -----------------------------------------------------------------------

    /// Create a proposal together with its image list in one transaction.
    ///
    /// Required fields are checked before anything is written. Image
    /// entries are inserted in input order; the first invalid entry or
    /// store failure rolls back the proposal row and every image already
    /// inserted. On success the committed state is re-read and returned
    /// fully hydrated.
    pub async fn save_composite(
        pool: &PgPool,
        input: &CompositeSaveInput,
    ) -> Result<ProposalDetail, CompositeSaveError> {
        let missing = missing_required(input);
        if !missing.is_empty() {
            return Err(CompositeSaveError::MissingFields(missing));
        }

        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO proposals
                (title, description, submitter, region_code, latitude, longitude,
                 agency_id, period_id, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.submitter)
        .bind(&input.region_code)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.agency_id)
        .bind(input.period_id)
        .bind(input.status_id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(images) = &input.images {
            if let Err(err) = insert_images(&mut tx, id, images).await {
                let _ = tx.rollback().await;
                return Err(err);
            }
        }

        tx.commit().await?;
        tracing::debug!(
            proposal_id = id,
            images = input.images.as_ref().map_or(0, Vec::len),
            "composite create committed"
        );

        Self::find_detail(pool, id)
            .await?
            .ok_or(CompositeSaveError::NotFound(id))
    }

    /// Update a proposal and (optionally) its image list in one
    /// transaction.
    ///
    /// Image handling: an absent list leaves images untouched; a present
    /// list is appended, or replaces the existing set entirely when
    /// `replace_images` is set (so a present-but-empty list with replace
    /// clears all images). Any failure rolls back the field update and
    /// all image deletes/inserts already performed.
    pub async fn update_composite(
        pool: &PgPool,
        id: DbId,
        input: &CompositeSaveInput,
    ) -> Result<ProposalDetail, CompositeSaveError> {
        let missing = missing_required(input);
        if !missing.is_empty() {
            return Err(CompositeSaveError::MissingFields(missing));
        }

        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE proposals SET
                title = $2, description = $3, submitter = $4, region_code = $5,
                latitude = $6, longitude = $7, agency_id = $8, period_id = $9,
                status_id = $10, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.submitter)
        .bind(&input.region_code)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.agency_id)
        .bind(input.period_id)
        .bind(input.status_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let _ = tx.rollback().await;
            return Err(CompositeSaveError::NotFound(id));
        }

        if let Some(images) = &input.images {
            if input.replace_images {
                sqlx::query("DELETE FROM proposal_images WHERE proposal_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
            }
            if let Err(err) = insert_images(&mut tx, id, images).await {
                let _ = tx.rollback().await;
                return Err(err);
            }
        }

        tx.commit().await?;
        tracing::debug!(
            proposal_id = id,
            replace_images = input.replace_images,
            "composite update committed"
        );

        Self::find_detail(pool, id)
            .await?
            .ok_or(CompositeSaveError::NotFound(id))
    }
}

/// Insert image entries in input order, short-circuiting on the first
/// entry without a usable `file_path`.
async fn insert_images(
    tx: &mut Transaction<'_, Postgres>,
    proposal_id: DbId,
    images: &[ImageEntry],
) -> Result<(), CompositeSaveError> {
    for (index, entry) in images.iter().enumerate() {
        let file_path = match entry.file_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => return Err(CompositeSaveError::ImageMissingPath(index)),
        };
        sqlx::query(
            "INSERT INTO proposal_images (proposal_id, file_path, caption) VALUES ($1, $2, $3)",
        )
        .bind(proposal_id)
        .bind(file_path)
        .bind(&entry.caption)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Names of the required composite fields that are missing or blank.
fn missing_required(input: &CompositeSaveInput) -> Vec<&'static str> {
    fn blank(value: &Option<String>) -> bool {
        value.as_deref().is_none_or(|v| v.trim().is_empty())
    }

    let mut missing = Vec::new();
    if blank(&input.title) {
        missing.push("title");
    }
    if blank(&input.submitter) {
        missing.push("submitter");
    }
    if input.agency_id.is_none() {
        missing.push("agency_id");
    }
    if input.period_id.is_none() {
        missing.push("period_id");
    }
    if input.status_id.is_none() {
        missing.push("status_id");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> CompositeSaveInput {
        CompositeSaveInput {
            title: Some("Road repair".into()),
            description: None,
            submitter: Some("A. Citizen".into()),
            region_code: None,
            latitude: None,
            longitude: None,
            agency_id: Some(1),
            period_id: Some(2),
            status_id: Some(1),
            images: None,
            replace_images: false,
        }
    }

    #[test]
    fn complete_input_has_no_missing_fields() {
        assert!(missing_required(&complete_input()).is_empty());
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let mut input = complete_input();
        input.title = Some("   ".into());
        assert_eq!(missing_required(&input), vec!["title"]);
    }

    #[test]
    fn all_required_fields_reported_at_once() {
        let input = CompositeSaveInput {
            title: None,
            description: Some("ignored".into()),
            submitter: None,
            region_code: None,
            latitude: None,
            longitude: None,
            agency_id: None,
            period_id: None,
            status_id: None,
            images: None,
            replace_images: false,
        };
        assert_eq!(
            missing_required(&input),
            vec!["title", "submitter", "agency_id", "period_id", "status_id"]
        );
    }

    #[test]
    fn missing_fields_error_lists_names() {
        let err = CompositeSaveError::MissingFields(vec!["title", "status_id"]);
        assert_eq!(err.to_string(), "missing required fields: title, status_id");
    }

    #[test]
    fn image_missing_path_error_names_the_index() {
        let err = CompositeSaveError::ImageMissingPath(2);
        assert_eq!(err.to_string(), "image at index 2 missing file_path");
    }
}
