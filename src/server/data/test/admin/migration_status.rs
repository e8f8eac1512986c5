use super::*;

/// Tests migration status before and after running migrations.
///
/// Verifies that a fresh database reports every migration as pending and that
/// running them moves all of them to applied.
///
/// Expected: Ok with four pending, then four applied and none pending
#[tokio::test]
async fn runs_pending_migrations() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let before = repo.migration_status().await?;
    assert!(before.applied.is_empty());
    assert_eq!(before.pending.len(), 4);

    repo.run_migrations().await?;

    let after = repo.migration_status().await?;
    assert_eq!(after.applied.len(), 4);
    assert!(after.pending.is_empty());
    assert_eq!(after.applied[0], "m20251018_000001_create_user_table");

    let columns = repo.columns("guest_items").await?;
    assert_eq!(columns.len(), 5);

    Ok(())
}
