use super::*;

/// Runs one claim per entry of `claims` at the same time, each on its own task.
///
/// Returns how many of them were accepted.
async fn claim_concurrently(db: &DatabaseConnection, claims: Vec<ClaimParams>) -> usize {
    let tasks: Vec<_> = claims
        .into_iter()
        .map(|params| {
            let db = db.clone();
            tokio::spawn(async move { ClaimRepository::new(&db).claim(params).await })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        let outcome = task.await.unwrap().unwrap();
        match outcome {
            ClaimOutcome::Done(_) => accepted += 1,
            ClaimOutcome::Insufficient { .. } => {}
            other => panic!("unexpected claim outcome {:?}", other),
        }
    }
    accepted
}

/// Sums the quantities of every claim stored for an item.
async fn claimed_units(db: &DatabaseConnection, item_name: &str) -> Result<i32, DbErr> {
    let claims = entity::prelude::GuestItem::find()
        .filter(entity::guest_item::Column::ItemName.eq(item_name))
        .all(db)
        .await?;

    Ok(claims.iter().map(|claim| claim.quantity_claimed).sum())
}

/// Tests many guests claiming the last units of an item at the same time.
///
/// Forty single-unit claims race for five units. Only as many claims as there are
/// units may succeed, and the stored counter must match the stored claims.
///
/// Expected: five claims accepted, counter and claim rows both at 5
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_claims_never_exceed_item_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_item_with_count(db, 5).await?;
    let mut claims = Vec::new();
    for _ in 0..40 {
        let guest = factory::create_guest(db).await?;
        claims.push(params(&guest, &item, 1));
    }

    let accepted = claim_concurrently(db, claims).await;

    assert_eq!(accepted, 5);
    assert_eq!(claimed_count(db, &item.item_name).await?, 5);
    assert_eq!(claimed_units(db, &item.item_name).await?, 5);

    Ok(())
}

/// Tests one guest claiming the same item from several requests at once.
///
/// Every accepted claim adds to the same junction row, so no increment may be lost
/// on either the row or the item counter.
///
/// Expected: one claim row holding every accepted unit, counter equal to it
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_claims_by_one_guest_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let item = factory::create_item_with_count(db, 6).await?;
    let claims = (0..12).map(|_| params(&guest, &item, 1)).collect();

    let accepted = claim_concurrently(db, claims).await;

    let rows = entity::prelude::GuestItem::find()
        .filter(entity::guest_item::Column::ItemName.eq(item.item_name.as_str()))
        .all(db)
        .await?;
    assert_eq!(accepted, 6);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity_claimed, 6);
    assert_eq!(claimed_count(db, &item.item_name).await?, 6);

    Ok(())
}

/// Tests claims racing against a guest deletion on the same item.
///
/// Whatever order the transactions run in, the counter must equal the units still
/// held by the claims that survive.
///
/// Expected: counter equals the sum of the remaining claims
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn claims_racing_guest_delete_keep_counter_consistent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_item_with_count(db, 10).await?;
    let leaving = factory::create_guest(db).await?;
    factory::claim::ClaimFactory::new(db, &leaving, &item)
        .quantity(2)
        .build()
        .await?;

    let mut claims = vec![params(&leaving, &item, 1)];
    for _ in 0..6 {
        let guest = factory::create_guest(db).await?;
        claims.push(params(&guest, &item, 1));
    }

    let delete = {
        let db = db.clone();
        let (name, number) = (leaving.name.clone(), leaving.number.clone());
        tokio::spawn(async move {
            crate::server::data::guest::GuestRepository::new(&db)
                .delete(&name, &number)
                .await
        })
    };
    let tasks: Vec<_> = claims
        .into_iter()
        .map(|params| {
            let db = db.clone();
            tokio::spawn(async move { ClaimRepository::new(&db).claim(params).await })
        })
        .collect();

    assert!(delete.await.unwrap()?.is_some());
    for task in tasks {
        task.await.unwrap()?;
    }

    assert_eq!(
        claimed_count(db, &item.item_name).await?,
        claimed_units(db, &item.item_name).await?
    );

    Ok(())
}
