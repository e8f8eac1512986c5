use super::*;

/// Tests deleting an item with claims.
///
/// Verifies that the item and every claim on it are removed.
///
/// Expected: Ok(Some), no item and no claims remain
#[tokio::test]
async fn deletes_item_and_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, item, _) = factory::helpers::create_claim_with_dependencies(db).await?;

    let repo = ItemRepository::new(db);
    let deleted = repo.delete(&item.item_name).await?;

    assert_eq!(deleted.map(|i| i.item_name), Some(item.item_name.clone()));
    assert!(repo.find_by_name(&item.item_name).await?.is_none());
    assert!(entity::prelude::GuestItem::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting an item that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let deleted = repo.delete("Nothing").await?;

    assert!(deleted.is_none());

    Ok(())
}
