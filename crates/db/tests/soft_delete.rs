//! Integration tests for soft-delete and hard-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted proposals are hidden from `find_with_refs`, `find_detail`,
//!   and list queries
//! - A direct include-deleted read still finds the row with `deleted_at` set
//! - Soft-delete is idempotent (second call returns `false`)
//! - Soft-delete leaves image rows in place; hard delete cascades to them

use musren_db::models::proposal::CompositeSaveInput;
use musren_db::models::proposal_image::ImageEntry;
use musren_db::repositories::{ProposalImageRepo, ProposalRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn with_images(title: &str, paths: &[&str]) -> CompositeSaveInput {
    CompositeSaveInput {
        title: Some(title.to_string()),
        description: None,
        submitter: Some("Soft Delete Tester".to_string()),
        region_code: None,
        latitude: None,
        longitude: None,
        agency_id: Some(1),
        period_id: Some(1),
        status_id: Some(1),
        images: Some(
            paths
                .iter()
                .map(|p| ImageEntry {
                    file_path: Some(p.to_string()),
                    caption: None,
                })
                .collect(),
        ),
        replace_images: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_find_with_refs(pool: PgPool) {
    let created = ProposalRepo::save_composite(&pool, &with_images("Hidden", &[]))
        .await
        .unwrap();

    let deleted = ProposalRepo::soft_delete(&pool, created.proposal.id)
        .await
        .unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    let found = ProposalRepo::find_with_refs(&pool, created.proposal.id)
        .await
        .unwrap();
    assert!(found.is_none());

    let detail = ProposalRepo::find_detail(&pool, created.proposal.id)
        .await
        .unwrap();
    assert!(detail.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_list(pool: PgPool) {
    let created = ProposalRepo::save_composite(&pool, &with_images("Listed Then Deleted", &[]))
        .await
        .unwrap();

    let before = ProposalRepo::list(&pool).await.unwrap();
    assert!(before.iter().any(|p| p.id == created.proposal.id));

    ProposalRepo::soft_delete(&pool, created.proposal.id)
        .await
        .unwrap();

    let after = ProposalRepo::list(&pool).await.unwrap();
    assert!(after.iter().all(|p| p.id != created.proposal.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_include_deleted_read_still_finds_the_row(pool: PgPool) {
    let created = ProposalRepo::save_composite(&pool, &with_images("Still There", &[]))
        .await
        .unwrap();
    ProposalRepo::soft_delete(&pool, created.proposal.id)
        .await
        .unwrap();

    let row = ProposalRepo::find_by_id_include_deleted(&pool, created.proposal.id)
        .await
        .unwrap()
        .expect("row should persist after soft delete");
    assert!(row.deleted_at.is_some());
    assert_eq!(row.title, "Still There");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let created = ProposalRepo::save_composite(&pool, &with_images("Once Only", &[]))
        .await
        .unwrap();

    assert!(ProposalRepo::soft_delete(&pool, created.proposal.id)
        .await
        .unwrap());
    assert!(!ProposalRepo::soft_delete(&pool, created.proposal.id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_of_missing_row_returns_false(pool: PgPool) {
    assert!(!ProposalRepo::soft_delete(&pool, 987654).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_leaves_image_rows(pool: PgPool) {
    let created = ProposalRepo::save_composite(
        &pool,
        &with_images("Keeps Images", &["/uploads/x.jpg", "/uploads/y.jpg"]),
    )
    .await
    .unwrap();

    ProposalRepo::soft_delete(&pool, created.proposal.id)
        .await
        .unwrap();

    let images = ProposalImageRepo::list_for_proposal(&pool, created.proposal.id)
        .await
        .unwrap();
    assert_eq!(images.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hard_delete_cascades_to_images(pool: PgPool) {
    let created = ProposalRepo::save_composite(
        &pool,
        &with_images("Cascade", &["/uploads/gone.jpg"]),
    )
    .await
    .unwrap();

    let removed = ProposalRepo::hard_delete(&pool, created.proposal.id)
        .await
        .unwrap();
    assert!(removed);

    let images = ProposalImageRepo::list_for_proposal(&pool, created.proposal.id)
        .await
        .unwrap();
    assert!(images.is_empty());

    let row = ProposalRepo::find_by_id_include_deleted(&pool, created.proposal.id)
        .await
        .unwrap();
    assert!(row.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_image_hard_delete_removes_single_row(pool: PgPool) {
    let created = ProposalRepo::save_composite(
        &pool,
        &with_images("One Of Two", &["/uploads/a.jpg", "/uploads/b.jpg"]),
    )
    .await
    .unwrap();

    let first = created.images[0].id;
    assert!(ProposalImageRepo::hard_delete(&pool, first).await.unwrap());
    assert!(!ProposalImageRepo::hard_delete(&pool, first).await.unwrap());

    let remaining = ProposalImageRepo::list_for_proposal(&pool, created.proposal.id)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].file_path, "/uploads/b.jpg");
}
