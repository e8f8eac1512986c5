use super::*;

/// Tests changing only the RSVP flag.
///
/// Verifies that the owner is kept when the update omits it.
///
/// Expected: Ok(Some) with going changed and owner preserved
#[tokio::test]
async fn updates_going_and_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let guest = factory::create_guest_for_user(db, &user.email).await?;

    let repo = GuestRepository::new(db);
    let updated = repo
        .update(UpdateGuestParams {
            name: guest.name.clone(),
            number: guest.number.clone(),
            user_email: None,
            going: Some(false),
        })
        .await?
        .unwrap();

    assert!(!updated.going);
    assert_eq!(updated.user_email, Some(user.email));

    Ok(())
}

/// Tests moving a guest to another user.
///
/// Expected: Ok(Some) with the new owner
#[tokio::test]
async fn reassigns_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuestRepository::new(db);
    let updated = repo
        .update(UpdateGuestParams {
            name: guest.name,
            number: guest.number,
            user_email: Some(user.email.clone()),
            going: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.user_email, Some(user.email));
    assert!(updated.going);

    Ok(())
}

/// Tests updating a guest that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let updated = repo
        .update(UpdateGuestParams {
            name: "Nobody".to_string(),
            number: "000-0000".to_string(),
            user_email: None,
            going: Some(true),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
