use super::*;

/// Tests listing items with units still available.
///
/// Verifies that partially claimed items count as available while fully claimed
/// items are excluded.
///
/// Expected: Ok with the open and partially claimed items
#[tokio::test]
async fn returns_items_with_units_left() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let open = factory::create_item(db).await?;
    let partial = factory::item::ItemFactory::new(db)
        .item_count(3)
        .claimed_count(1)
        .build()
        .await?;
    factory::item::ItemFactory::new(db)
        .item_count(2)
        .claimed_count(2)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let mut names: Vec<String> = repo
        .get_unclaimed()
        .await?
        .into_iter()
        .map(|i| i.item_name)
        .collect();
    names.sort();

    let mut expected = vec![open.item_name, partial.item_name];
    expected.sort();
    assert_eq!(names, expected);

    Ok(())
}

/// Tests items whose counter has reached or passed their count.
///
/// Verifies that the comparison is made between the two columns of each row, so an
/// item with nothing wanted or more claimed than wanted is never listed.
///
/// Expected: Ok with only the item that still has a unit left
#[tokio::test]
async fn excludes_zero_count_and_overclaimed_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::item::ItemFactory::new(db)
        .item_count(0)
        .build()
        .await?;
    factory::item::ItemFactory::new(db)
        .item_count(1)
        .claimed_count(2)
        .build()
        .await?;
    let last = factory::item::ItemFactory::new(db)
        .item_count(10)
        .claimed_count(9)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let items = repo.get_unclaimed().await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_name, last.item_name);
    assert_eq!(items[0].available_count(), 1);

    Ok(())
}
