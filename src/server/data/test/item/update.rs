use super::*;

/// Tests a partial item update.
///
/// Verifies that the count changes while the link is preserved and the claimed
/// counter is untouched.
///
/// Expected: Ok(Done) with the new count
#[tokio::test]
async fn updates_count_and_keeps_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::item::ItemFactory::new(db)
        .item_link("https://example.com/kettle")
        .item_count(2)
        .claimed_count(1)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let outcome = repo
        .update(UpdateItemParams {
            item_name: item.item_name.clone(),
            item_link: None,
            item_photo: Some("https://example.com/kettle.png".to_string()),
            item_count: Some(4),
        })
        .await?;

    let ItemUpdate::Done(updated) = outcome else {
        panic!("expected update to succeed, got {:?}", outcome);
    };

    assert_eq!(updated.item_count, 4);
    assert_eq!(updated.claimed_count, 1);
    assert_eq!(
        updated.item_link.as_deref(),
        Some("https://example.com/kettle")
    );
    assert_eq!(
        updated.item_photo.as_deref(),
        Some("https://example.com/kettle.png")
    );

    Ok(())
}

/// Tests updating an item that does not exist.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn returns_none_for_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let outcome = repo
        .update(UpdateItemParams {
            item_name: "Nothing".to_string(),
            item_link: None,
            item_photo: None,
            item_count: Some(1),
        })
        .await?;

    assert_eq!(outcome, ItemUpdate::NotFound);

    Ok(())
}

/// Tests lowering an item's count below what guests already claimed.
///
/// Verifies that the refusal reports the claimed count and that nothing in the
/// update is written, including fields that were valid on their own.
///
/// Expected: Ok(BelowClaimed) with the stored item unchanged
#[tokio::test]
async fn refuses_count_below_claimed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::item::ItemFactory::new(db)
        .item_count(5)
        .claimed_count(3)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let outcome = repo
        .update(UpdateItemParams {
            item_name: item.item_name.clone(),
            item_link: Some("https://example.com/new".to_string()),
            item_photo: None,
            item_count: Some(2),
        })
        .await?;

    assert_eq!(outcome, ItemUpdate::BelowClaimed { claimed_count: 3 });

    let stored = entity::prelude::Item::find_by_id(item.item_name.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.item_count, 5);
    assert_eq!(stored.item_link, item.item_link);

    // Exactly the claimed count is still allowed.
    let outcome = repo
        .update(UpdateItemParams {
            item_name: item.item_name.clone(),
            item_link: None,
            item_photo: None,
            item_count: Some(3),
        })
        .await?;

    let ItemUpdate::Done(updated) = outcome else {
        panic!("expected update to succeed, got {:?}", outcome);
    };
    assert_eq!(updated.item_count, 3);

    Ok(())
}
