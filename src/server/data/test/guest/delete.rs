use super::*;

/// Tests that deleting a guest releases their claims.
///
/// Verifies that the guest's claims are removed and each claimed item's counter
/// drops by the claimed quantity.
///
/// Expected: Ok(Some), claims removed, counters restored
#[tokio::test]
async fn releases_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let other = factory::create_guest(db).await?;
    let item = factory::create_item_with_count(db, 6).await?;
    factory::claim::ClaimFactory::new(db, &guest, &item)
        .quantity(3)
        .build()
        .await?;
    factory::claim::ClaimFactory::new(db, &other, &item)
        .quantity(2)
        .build()
        .await?;

    let repo = GuestRepository::new(db);
    let deleted = repo.delete(&guest.name, &guest.number).await?;

    assert!(deleted.is_some());
    assert!(repo.find_by_key(&guest.name, &guest.number).await?.is_none());

    let item = entity::prelude::Item::find_by_id(item.item_name)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(item.claimed_count, 2);
    assert_eq!(entity::prelude::GuestItem::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests deleting a guest that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let deleted = repo.delete("Nobody", "000-0000").await?;

    assert!(deleted.is_none());

    Ok(())
}
