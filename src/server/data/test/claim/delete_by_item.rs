use super::*;

/// Tests removing all claims on an item.
///
/// Expected: Ok with every claim removed and the counter back at zero
#[tokio::test]
async fn removes_item_claims_and_resets_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guest(db).await?;
    let second = factory::create_guest(db).await?;
    let item = factory::create_item_with_count(db, 5).await?;
    factory::create_claim(db, &first, &item).await?;
    factory::claim::ClaimFactory::new(db, &second, &item)
        .quantity(3)
        .build()
        .await?;

    let repo = ClaimRepository::new(db);
    let removed = repo.delete_by_item(&item.item_name).await?;

    assert_eq!(removed.len(), 2);
    assert_eq!(claimed_count(db, &item.item_name).await?, 0);
    assert!(repo.get_by_item(&item.item_name).await?.is_empty());

    Ok(())
}
