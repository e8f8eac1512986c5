use super::*;

/// Tests listing the guests owned by a user.
///
/// Verifies that guests without an owner or owned by another user are excluded.
///
/// Expected: Ok with only the user's guests
#[tokio::test]
async fn returns_only_owned_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owned = factory::create_guest_for_user(db, &user.email).await?;
    factory::create_guest_for_user(db, &other.email).await?;
    factory::create_guest(db).await?;

    let repo = GuestRepository::new(db);
    let guests = repo.get_by_user(&user.email).await?;

    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].name, owned.name);

    Ok(())
}

/// Tests listing guests for an email with no user.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let guests = repo.get_by_user("nobody@example.com").await?;

    assert!(guests.is_empty());

    Ok(())
}
