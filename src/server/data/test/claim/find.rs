use super::*;

/// Tests finding a claim with its item and owner details.
///
/// Expected: Ok(Some) with item link, item count and owner email filled in
#[tokio::test]
async fn finds_claim_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let guest = factory::create_guest_for_user(db, &user.email).await?;
    let item = factory::item::ItemFactory::new(db)
        .item_link("https://example.com/blender")
        .item_count(2)
        .build()
        .await?;
    factory::create_claim(db, &guest, &item).await?;

    let repo = ClaimRepository::new(db);
    let detail = repo
        .find(&guest.name, &guest.number, &item.item_name)
        .await?
        .unwrap();

    assert_eq!(detail.claim.quantity_claimed, 1);
    assert_eq!(
        detail.item_link.as_deref(),
        Some("https://example.com/blender")
    );
    assert_eq!(detail.item_count, Some(2));
    assert_eq!(detail.user_email, Some(user.email));

    Ok(())
}

/// Tests finding a claim that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let item = factory::create_item(db).await?;

    let repo = ClaimRepository::new(db);
    let detail = repo
        .find(&guest.name, &guest.number, &item.item_name)
        .await?;

    assert!(detail.is_none());

    Ok(())
}
