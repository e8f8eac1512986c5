use super::*;

/// Tests listing items with at least one unit claimed.
///
/// Expected: Ok with only the partially and fully claimed items
#[tokio::test]
async fn returns_items_with_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let partial = factory::item::ItemFactory::new(db)
        .item_count(3)
        .claimed_count(1)
        .build()
        .await?;
    let full = factory::item::ItemFactory::new(db)
        .item_count(2)
        .claimed_count(2)
        .build()
        .await?;
    factory::create_item(db).await?;

    let repo = ItemRepository::new(db);
    let mut names: Vec<String> = repo
        .get_claimed()
        .await?
        .into_iter()
        .map(|i| i.item_name)
        .collect();
    names.sort();

    let mut expected = vec![partial.item_name, full.item_name];
    expected.sort();
    assert_eq!(names, expected);

    Ok(())
}
