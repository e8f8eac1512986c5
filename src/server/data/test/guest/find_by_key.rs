use super::*;

/// Tests finding a guest by its composite key.
///
/// Expected: Ok(Some) with the matching guest
#[tokio::test]
async fn finds_existing_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = GuestRepository::new(db);
    let found = repo.find_by_key(&guest.name, &guest.number).await?;

    assert_eq!(found.map(|g| g.name), Some(guest.name));

    Ok(())
}

/// Tests that a matching name with a different number is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn requires_both_name_and_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = GuestRepository::new(db);
    let found = repo.find_by_key(&guest.name, "000-0000").await?;

    assert!(found.is_none());

    Ok(())
}
