use super::*;

/// Tests listing the claims on one item.
///
/// Verifies that claims on other items are excluded and that claims of guests
/// without an owner carry no user email.
///
/// Expected: Ok with the item's two claims
#[tokio::test]
async fn returns_claims_for_item_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guest(db).await?;
    let second = factory::create_guest(db).await?;
    let item = factory::create_item(db).await?;
    let other_item = factory::create_item(db).await?;
    factory::create_claim(db, &first, &item).await?;
    factory::create_claim(db, &second, &item).await?;
    factory::create_claim(db, &first, &other_item).await?;

    let repo = ClaimRepository::new(db);
    let claims = repo.get_by_item(&item.item_name).await?;

    assert_eq!(claims.len(), 2);
    assert!(claims.iter().all(|c| c.claim.item_name == item.item_name));
    assert!(claims.iter().all(|c| c.user_email.is_none()));
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
