use super::*;

/// Tests removing all claims of a guest.
///
/// Verifies that every removed claim is returned and each item's counter drops
/// by that guest's quantity only.
///
/// Expected: Ok with two removed claims and counters adjusted
#[tokio::test]
async fn removes_guest_claims_and_releases_units() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let other = factory::create_guest(db).await?;
    let first = factory::create_item_with_count(db, 5).await?;
    let second = factory::create_item_with_count(db, 5).await?;
    factory::claim::ClaimFactory::new(db, &guest, &first)
        .quantity(2)
        .build()
        .await?;
    factory::create_claim(db, &guest, &second).await?;
    factory::create_claim(db, &other, &first).await?;

    let repo = ClaimRepository::new(db);
    let removed = repo.delete_by_guest(&guest.name, &guest.number).await?;

    assert_eq!(removed.len(), 2);
    assert_eq!(claimed_count(db, &first.item_name).await?, 1);
    assert_eq!(claimed_count(db, &second.item_name).await?, 0);
    assert!(repo
        .get_by_guest(&guest.name, &guest.number)
        .await?
        .is_empty());

    Ok(())
}

/// Tests removing claims of a guest that has none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_guest_has_no_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = ClaimRepository::new(db);
    let removed = repo.delete_by_guest(&guest.name, &guest.number).await?;

    assert!(removed.is_empty());

    Ok(())
}
