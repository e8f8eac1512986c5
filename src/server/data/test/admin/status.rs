use super::*;

/// Tests the connectivity report against SQLite.
///
/// Expected: Ok with the sqlite backend and a version string
#[tokio::test]
async fn reports_sqlite_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let status = repo.status().await?;

    assert_eq!(status.backend, "sqlite");
    assert!(status.version.starts_with("SQLite "));
    assert!(!status.time.is_empty());

    Ok(())
}
