use super::*;

/// Tests fetching a user with the guests they own.
///
/// Verifies that only guests owned by the user are included.
///
/// Expected: Ok(Some) with the user's two guests
#[tokio::test]
async fn includes_owned_guests_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_guest_for_user(db, &user.email).await?;
    factory::create_guest_for_user(db, &user.email).await?;
    factory::create_guest(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.get_with_guests(&user.email).await?.unwrap();

    assert_eq!(result.user.email, user.email);
    assert_eq!(result.guests.len(), 2);
    assert!(result
        .guests
        .iter()
        .all(|g| g.user_email.as_deref() == Some(user.email.as_str())));

    Ok(())
}

/// Tests fetching guests for an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.get_with_guests("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
