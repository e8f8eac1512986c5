use super::*;

/// Tests removing a claim.
///
/// Verifies that claim then unclaim restores the counter to its prior value.
///
/// Expected: Ok(Done) with the removed claim and counter restored
#[tokio::test]
async fn removes_claim_and_restores_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let item = factory::create_item_with_count(db, 4).await?;

    let repo = ClaimRepository::new(db);
    repo.claim(params(&guest, &item, 3)).await?;
    let outcome = repo
        .unclaim(&guest.name, &guest.number, &item.item_name)
        .await?;

    let ClaimOutcome::Done(change) = outcome else {
        panic!("expected unclaim to succeed, got {:?}", outcome);
    };
    assert_eq!(change.claim.quantity_claimed, 3);
    assert_eq!(change.item.claimed_count, 0);
    assert_eq!(claimed_count(db, &item.item_name).await?, 0);
    assert!(repo
        .find(&guest.name, &guest.number, &item.item_name)
        .await?
        .is_none());

    Ok(())
}

/// Tests unclaiming when the guest holds no claim on the item.
///
/// Expected: Ok(ClaimNotFound) with the counter untouched
#[tokio::test]
async fn reports_missing_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, item, _) = factory::helpers::create_claim_with_dependencies(db).await?;
    let stranger = factory::create_guest(db).await?;

    let repo = ClaimRepository::new(db);
    let outcome = repo
        .unclaim(&stranger.name, &stranger.number, &item.item_name)
        .await?;

    assert_eq!(outcome, ClaimOutcome::ClaimNotFound);
    assert_eq!(claimed_count(db, &item.item_name).await?, 1);

    Ok(())
}
