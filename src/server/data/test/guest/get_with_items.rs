use super::*;

/// Tests fetching a guest with the items they claimed.
///
/// Verifies that each claimed item carries the claimed quantity and the item's
/// details.
///
/// Expected: Ok(Some) with one claimed item
#[tokio::test]
async fn includes_claimed_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let item = factory::item::ItemFactory::new(db)
        .item_link("https://example.com/toaster")
        .item_count(3)
        .build()
        .await?;
    factory::claim::ClaimFactory::new(db, &guest, &item)
        .quantity(2)
        .build()
        .await?;
    factory::create_item(db).await?;

    let repo = GuestRepository::new(db);
    let result = repo
        .get_with_items(&guest.name, &guest.number)
        .await?
        .unwrap();

    assert_eq!(result.claimed_items.len(), 1);
    let claimed = &result.claimed_items[0];
    assert_eq!(claimed.item_name, item.item_name);
    assert_eq!(claimed.quantity_claimed, 2);
    assert_eq!(claimed.item_count, 3);
    assert_eq!(
        claimed.item_link.as_deref(),
        Some("https://example.com/toaster")
    );

    Ok(())
}

/// Tests fetching items for an unknown guest.
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
    let result = repo.get_with_items("Nobody", "000-0000").await?;

    assert!(result.is_none());

    Ok(())
}
