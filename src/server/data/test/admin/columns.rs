use super::*;

/// Tests listing the columns of the items table.
///
/// Expected: Ok with every item column in declaration order
#[tokio::test]
async fn lists_item_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let columns = repo.columns("items").await?;

    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "item_name",
            "item_link",
            "item_photo",
            "item_count",
            "claimed_count",
            "created_at",
            "updated_at"
        ]
    );

    let link = columns.iter().find(|c| c.name == "item_link").unwrap();
    assert!(link.nullable);
    let count = columns.iter().find(|c| c.name == "item_count").unwrap();
    assert!(!count.nullable);

    Ok(())
}

/// Tests listing columns of a table that does not exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let columns = repo.columns("users").await?;

    assert!(columns.is_empty());

    Ok(())
}
