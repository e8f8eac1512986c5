use super::*;

/// Tests deleting a user without guests.
///
/// Expected: Ok(Some) and the user no longer exists
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(&user.email).await?;

    assert_eq!(deleted.map(|u| u.email), Some(user.email.clone()));
    assert!(repo.find_by_email(&user.email).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
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
    let deleted = repo.delete("nobody@example.com").await?;

    assert!(deleted.is_none());

    Ok(())
}

/// Tests that deleting a user releases the claims of the guests they own.
///
/// Verifies that the owned guests and their claims are removed and that the
/// claimed item's counter drops back to zero.
///
/// Expected: Ok(Some), guests and claims removed, item counter restored
#[tokio::test]
async fn releases_claims_of_owned_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_guest_for_user(db, &user.email).await?;
    let second = factory::create_guest_for_user(db, &user.email).await?;
    let item = factory::create_item_with_count(db, 5).await?;
    factory::claim::ClaimFactory::new(db, &first, &item)
        .quantity(2)
        .build()
        .await?;
    factory::create_claim(db, &second, &item).await?;

    let repo = UserRepository::new(db);
    repo.delete(&user.email).await?;

    let item = entity::prelude::Item::find_by_id(item.item_name)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(item.claimed_count, 0);
    assert!(entity::prelude::Guest::find().all(db).await?.is_empty());
    assert!(entity::prelude::GuestItem::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that deleting one user leaves other users' claims untouched.
///
/// Expected: Ok(Some), the other guest's claim and its share of the counter remain
#[tokio::test]
async fn keeps_claims_of_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owned_guest = factory::create_guest_for_user(db, &owner.email).await?;
    let other_guest = factory::create_guest_for_user(db, &other.email).await?;
    let item = factory::create_item_with_count(db, 5).await?;
    factory::create_claim(db, &owned_guest, &item).await?;
    factory::create_claim(db, &other_guest, &item).await?;

    let repo = UserRepository::new(db);
    repo.delete(&owner.email).await?;

    let item = entity::prelude::Item::find_by_id(item.item_name)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(item.claimed_count, 1);
    assert_eq!(entity::prelude::GuestItem::find().all(db).await?.len(), 1);

    Ok(())
}
