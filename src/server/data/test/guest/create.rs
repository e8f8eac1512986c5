use super::*;

/// Tests creating a guest owned by an existing user.
///
/// Expected: Ok with guest created and linked to the user
#[tokio::test]
async fn creates_guest_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = GuestRepository::new(db);
    let guest = repo
        .create(CreateGuestParams {
            name: "Ada".to_string(),
            number: "555-0100".to_string(),
            user_email: Some(user.email.clone()),
            going: false,
        })
        .await?;

    assert_eq!(guest.name, "Ada");
    assert_eq!(guest.number, "555-0100");
    assert_eq!(guest.user_email, Some(user.email));
    assert!(!guest.going);

    Ok(())
}

/// Tests that the same name may be reused with a different number.
///
/// Verifies that uniqueness is enforced on the (name, number) pair rather than
/// on the name alone.
///
/// Expected: Ok for both guests
#[tokio::test]
async fn allows_same_name_with_different_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    for number in ["555-0100", "555-0101"] {
        repo.create(CreateGuestParams {
            name: "Ada".to_string(),
            number: number.to_string(),
            user_email: None,
            going: true,
        })
        .await?;
    }

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}

/// Tests creating a guest whose key already exists.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_guest(db).await?;

    let repo = GuestRepository::new(db);
    let err = repo
        .create(CreateGuestParams {
            name: existing.name,
            number: existing.number,
            user_email: None,
            going: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests creating a guest that references an unknown user.
///
/// Expected: Err with foreign key constraint violation
#[tokio::test]
async fn rejects_unknown_user_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let err = repo
        .create(CreateGuestParams {
            name: "Ada".to_string(),
            number: "555-0100".to_string(),
            user_email: Some("nobody@example.com".to_string()),
            going: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
