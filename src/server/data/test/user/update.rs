use super::*;

/// Tests a partial update that changes only the name.
///
/// Verifies that fields absent from the update keep their stored values.
///
/// Expected: Ok(Some) with name changed and other fields preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .number("555-0199")
        .role("host")
        .password("original-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            email: user.email.clone(),
            name: Some("Renamed".to_string()),
            number: None,
            password: None,
            role: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.number.as_deref(), Some("555-0199"));
    assert_eq!(updated.role.as_deref(), Some("host"));
    assert!(updated.updated_at >= user.updated_at);

    let stored = entity::prelude::User::find_by_id(user.email)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "original-hash");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            email: "nobody@example.com".to_string(),
            name: Some("Nobody".to_string()),
            number: None,
            password: None,
            role: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
