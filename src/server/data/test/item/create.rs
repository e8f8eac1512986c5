use super::*;

/// Tests creating an item.
///
/// Verifies that a new item starts with nothing claimed.
///
/// Expected: Ok with claimed_count of 0
#[tokio::test]
async fn creates_item_with_nothing_claimed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            item_name: "Toaster".to_string(),
            item_link: Some("https://example.com/toaster".to_string()),
            item_photo: None,
            item_count: 2,
        })
        .await?;

    assert_eq!(item.item_name, "Toaster");
    assert_eq!(item.item_count, 2);
    assert_eq!(item.claimed_count, 0);
    assert_eq!(item.available_count(), 2);

    Ok(())
}

/// Tests creating an item whose name is taken.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_item(db).await?;

    let repo = ItemRepository::new(db);
    let err = repo
        .create(CreateItemParams {
            item_name: existing.item_name,
            item_link: None,
            item_photo: None,
            item_count: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
