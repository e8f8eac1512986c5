use super::*;

/// Tests fetching an item with its claimants.
///
/// Verifies that each claimant carries the quantity and the guest's owning user.
///
/// Expected: Ok(Some) with one claimant
#[tokio::test]
async fn includes_claimants_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, guest, item, _) = factory::helpers::create_claim_with_dependencies(db).await?;

    let repo = ItemRepository::new(db);
    let result = repo.get_with_claims(&item.item_name).await?.unwrap();

    assert_eq!(result.item.claimed_count, 1);
    assert_eq!(result.claims.len(), 1);
    let claimant = &result.claims[0];
    assert_eq!(claimant.guest_name, guest.name);
    assert_eq!(claimant.guest_number, guest.number);
    assert_eq!(claimant.quantity_claimed, 1);
    assert_eq!(claimant.user_email, Some(user.email));

    Ok(())
}

/// Tests fetching an unclaimed item.
///
/// Expected: Ok(Some) with no claimants
#[tokio::test]
async fn returns_empty_claims_for_unclaimed_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_item(db).await?;

    let repo = ItemRepository::new(db);
    let result = repo.get_with_claims(&item.item_name).await?.unwrap();

    assert!(result.claims.is_empty());

    Ok(())
}
