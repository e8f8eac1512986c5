use super::*;

/// Tests listing the items a guest has claimed.
///
/// Expected: Ok with only the items claimed by that guest
#[tokio::test]
async fn returns_items_claimed_by_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let other = factory::create_guest(db).await?;
    let claimed = factory::create_item(db).await?;
    let not_mine = factory::create_item(db).await?;
    factory::create_item(db).await?;
    factory::create_claim(db, &guest, &claimed).await?;
    factory::create_claim(db, &other, &not_mine).await?;

    let repo = ItemRepository::new(db);
    let items = repo.get_by_guest(&guest.name, &guest.number).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_name, claimed.item_name);
    assert_eq!(items[0].claimed_count, 1);

    Ok(())
}
