//! Claim data repository for database operations.
//!
//! This module provides the `ClaimRepository` for the guest/item junction. Every
//! operation that adds or removes claimed units runs in a transaction that also
//! adjusts the item's `claimed_count`, so the counter always equals the sum of the
//! item's claims. Refused mutations roll back explicitly and are reported through
//! `ClaimOutcome`.
//!
//! Each of those transactions first reads the item row with `SELECT ... FOR UPDATE`.
//! Writers on the same item queue behind that lock, so the availability check, the
//! claim row and the counter are read and written by one transaction at a time.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use std::collections::{BTreeMap, HashMap};

use crate::server::model::{
    claim::{Claim, ClaimChange, ClaimDetail, ClaimOutcome, ClaimParams},
    item::Item,
};

/// Repository providing database operations for claims.
pub struct ClaimRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimRepository<'a> {
    /// Creates a new ClaimRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClaimRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every claim with item and owner details, newest first.
    pub async fn get_all(&self) -> Result<Vec<ClaimDetail>, DbErr> {
        let rows = entity::prelude::GuestItem::find()
            .find_also_related(entity::prelude::Item)
            .order_by_desc(entity::guest_item::Column::CreatedAt)
            .order_by_asc(entity::guest_item::Column::ItemName)
            .all(self.db)
            .await?;

        self.with_owners(rows).await
    }

    /// Gets the claims made by one guest, newest first.
    ///
    /// # Arguments
    /// - `guest_name` - Guest name
    /// - `guest_number` - Guest phone number
    ///
    /// # Returns
    /// - `Ok(Vec<ClaimDetail>)` - Claims, empty if the guest has none or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guest(
        &self,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Vec<ClaimDetail>, DbErr> {
        let rows = entity::prelude::GuestItem::find()
            .filter(entity::guest_item::Column::GuestName.eq(guest_name))
            .filter(entity::guest_item::Column::GuestNumber.eq(guest_number))
            .find_also_related(entity::prelude::Item)
            .order_by_desc(entity::guest_item::Column::CreatedAt)
            .order_by_asc(entity::guest_item::Column::ItemName)
            .all(self.db)
            .await?;

        self.with_owners(rows).await
    }

    /// Gets the claims on one item, newest first.
    pub async fn get_by_item(&self, item_name: &str) -> Result<Vec<ClaimDetail>, DbErr> {
        let rows = entity::prelude::GuestItem::find()
            .filter(entity::guest_item::Column::ItemName.eq(item_name))
            .find_also_related(entity::prelude::Item)
            .order_by_desc(entity::guest_item::Column::CreatedAt)
            .order_by_asc(entity::guest_item::Column::GuestName)
            .order_by_asc(entity::guest_item::Column::GuestNumber)
            .all(self.db)
            .await?;

        self.with_owners(rows).await
    }

    /// Finds a single claim by its composite key.
    ///
    /// # Returns
    /// - `Ok(Some(ClaimDetail))` - Claim found
    /// - `Ok(None)` - The guest has no claim on the item
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        guest_name: &str,
        guest_number: &str,
        item_name: &str,
    ) -> Result<Option<ClaimDetail>, DbErr> {
        let row = entity::prelude::GuestItem::find_by_id((
            guest_name.to_string(),
            guest_number.to_string(),
            item_name.to_string(),
        ))
        .find_also_related(entity::prelude::Item)
        .one(self.db)
        .await?;

        Ok(self.with_owners(row.into_iter().collect()).await?.pop())
    }

    /// Claims units of an item for a guest.
    ///
    /// Inside one transaction: verifies the item and guest exist, checks that enough
    /// units remain, inserts the claim or adds to the guest's existing claim, and
    /// increments the item's `claimed_count`.
    ///
    /// # Arguments
    /// - `params` - Guest key, item name and a quantity of at least 1
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Done(ClaimChange))` - Claim stored and counter incremented
    /// - `Ok(ClaimOutcome::ItemNotFound | GuestNotFound | Insufficient)` - Refused, rolled back
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn claim(&self, params: ClaimParams) -> Result<ClaimOutcome<ClaimChange>, DbErr> {
        let txn = self.db.begin().await?;
        let result = claim_in(&txn, params).await;
        finish(txn, result).await
    }

    /// Sets a claim to an absolute quantity.
    ///
    /// Adjusts the claim and the item counter by the difference in one transaction.
    /// Increases are subject to the same availability check as new claims.
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Done(ClaimChange))` - Claim and counter updated
    /// - `Ok(ClaimOutcome::ClaimNotFound | ItemNotFound | Insufficient)` - Refused, rolled back
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn set_quantity(
        &self,
        guest_name: &str,
        guest_number: &str,
        item_name: &str,
        quantity: i32,
    ) -> Result<ClaimOutcome<ClaimChange>, DbErr> {
        let txn = self.db.begin().await?;
        let result = set_quantity_in(&txn, guest_name, guest_number, item_name, quantity).await;
        finish(txn, result).await
    }

    /// Removes a guest's claim on an item and releases its units.
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Done(ClaimChange))` - Claim removed; `claim` holds the removed row
    /// - `Ok(ClaimOutcome::ClaimNotFound)` - No such claim, rolled back
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn unclaim(
        &self,
        guest_name: &str,
        guest_number: &str,
        item_name: &str,
    ) -> Result<ClaimOutcome<ClaimChange>, DbErr> {
        let txn = self.db.begin().await?;
        let result = unclaim_in(&txn, guest_name, guest_number, item_name).await;
        finish(txn, result).await
    }

    /// Removes every claim made by a guest, releasing the units on each item.
    ///
    /// # Returns
    /// - `Ok(Vec<Claim>)` - The removed claims, empty if there were none
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn delete_by_guest(
        &self,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Vec<Claim>, DbErr> {
        let filter = Condition::all()
            .add(entity::guest_item::Column::GuestName.eq(guest_name))
            .add(entity::guest_item::Column::GuestNumber.eq(guest_number));

        let txn = self.db.begin().await?;
        let removed = async {
            lock_guest(&txn, guest_name, guest_number).await?;
            remove_claims(&txn, filter).await
        }
        .await;

        match removed {
            Ok(removed) => {
                txn.commit().await?;
                Ok(removed)
            }
            Err(err) => Err(rollback(txn, err).await),
        }
    }

    /// Removes every claim on an item and resets its counter.
    ///
    /// # Returns
    /// - `Ok(Vec<Claim>)` - The removed claims, empty if there were none
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn delete_by_item(&self, item_name: &str) -> Result<Vec<Claim>, DbErr> {
        let filter = Condition::all().add(entity::guest_item::Column::ItemName.eq(item_name));

        let txn = self.db.begin().await?;
        let removed = async {
            lock_item(&txn, item_name).await?;
            remove_claims(&txn, filter).await
        }
        .await;

        match removed {
            Ok(removed) => {
                txn.commit().await?;
                Ok(removed)
            }
            Err(err) => Err(rollback(txn, err).await),
        }
    }

    /// Attaches the owning user of each claim's guest.
    async fn with_owners(
        &self,
        rows: Vec<(entity::guest_item::Model, Option<entity::item::Model>)>,
    ) -> Result<Vec<ClaimDetail>, DbErr> {
        let mut guests: HashMap<(String, String), Option<entity::guest::Model>> = HashMap::new();
        let mut details = Vec::with_capacity(rows.len());

        for (claim, item) in rows {
            let key = (claim.guest_name.clone(), claim.guest_number.clone());
            if !guests.contains_key(&key) {
                let guest = entity::prelude::Guest::find_by_id(key.clone())
                    .one(self.db)
                    .await?;
                guests.insert(key.clone(), guest);
            }

            let guest = guests.get(&key).and_then(|g| g.as_ref());
            details.push(ClaimDetail::from_entity(claim, item, guest));
        }

        Ok(details)
    }
}

/// Decrements item counters by the quantities of the claims matching `filter`.
///
/// The affected items are locked in name order, so two transactions releasing
/// overlapping items cannot deadlock. The claims are read again once their items are
/// locked; the quantities released are the ones no other writer can still change.
/// Counters never drop below zero.
///
/// The claims themselves are left in place; callers delete them (or let a cascade do
/// so) in the same transaction. Callers must already hold the lock that stops new
/// claims from matching `filter`: the guest row for guest-scoped filters, the item
/// row for item-scoped ones.
///
/// # Returns
/// - `Ok(Vec<guest_item::Model>)` - The claims whose units were released
/// - `Err(DbErr)` - Database error
pub(crate) async fn release_claims<C: ConnectionTrait>(
    conn: &C,
    filter: Condition,
) -> Result<Vec<entity::guest_item::Model>, DbErr> {
    let mut item_names: Vec<String> = entity::prelude::GuestItem::find()
        .filter(filter.clone())
        .all(conn)
        .await?
        .into_iter()
        .map(|claim| claim.item_name)
        .collect();
    item_names.sort();
    item_names.dedup();

    let mut items = BTreeMap::new();
    for item_name in item_names {
        if let Some(item) = lock_item(conn, &item_name).await? {
            items.insert(item_name, item);
        }
    }

    let claims = entity::prelude::GuestItem::find()
        .filter(filter)
        .order_by_desc(entity::guest_item::Column::CreatedAt)
        .all(conn)
        .await?;

    let mut released: BTreeMap<&str, i32> = BTreeMap::new();
    for claim in &claims {
        *released.entry(claim.item_name.as_str()).or_default() += claim.quantity_claimed;
    }

    for (item_name, quantity) in released {
        let Some(item) = items.remove(item_name) else {
            continue;
        };

        let claimed_count = (item.claimed_count - quantity).max(0);
        let mut item = item.into_active_model();
        item.claimed_count = ActiveValue::Set(claimed_count);
        item.updated_at = ActiveValue::Set(Utc::now());
        item.update(conn).await?;
    }

    Ok(claims)
}

/// Rolls back a failed transaction and hands the original error back.
///
/// A rollback failure is logged; the error that caused it takes precedence.
pub(crate) async fn rollback(txn: DatabaseTransaction, err: DbErr) -> DbErr {
    if let Err(rollback_err) = txn.rollback().await {
        tracing::error!("Failed to roll back transaction: {}", rollback_err);
    }
    err
}

/// Commits on `Done`, rolls back on any refusal or error.
async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<ClaimOutcome<T>, DbErr>,
) -> Result<ClaimOutcome<T>, DbErr> {
    match result {
        Ok(ClaimOutcome::Done(value)) => {
            txn.commit().await?;
            Ok(ClaimOutcome::Done(value))
        }
        Ok(refused) => {
            txn.rollback().await?;
            Ok(refused)
        }
        Err(err) => Err(rollback(txn, err).await),
    }
}

async fn claim_in(
    txn: &DatabaseTransaction,
    params: ClaimParams,
) -> Result<ClaimOutcome<ClaimChange>, DbErr> {
    // Guest before item, the same order guest deletion takes its locks in.
    let guest = entity::prelude::Guest::find_by_id((
        params.guest_name.clone(),
        params.guest_number.clone(),
    ))
    .lock_shared()
    .one(txn)
    .await?;

    let Some(item) = lock_item(txn, &params.item_name).await? else {
        return Ok(ClaimOutcome::ItemNotFound);
    };

    if guest.is_none() {
        return Ok(ClaimOutcome::GuestNotFound);
    }

    let available = item.item_count - item.claimed_count;
    if params.quantity > available {
        return Ok(ClaimOutcome::Insufficient {
            available: available.max(0),
        });
    }

    let existing = entity::prelude::GuestItem::find_by_id((
        params.guest_name.clone(),
        params.guest_number.clone(),
        params.item_name.clone(),
    ))
    .one(txn)
    .await?;

    let claim = match existing {
        Some(existing) => {
            let quantity = existing.quantity_claimed + params.quantity;
            let mut claim = existing.into_active_model();
            claim.quantity_claimed = ActiveValue::Set(quantity);
            claim.update(txn).await?
        }
        None => {
            entity::guest_item::ActiveModel {
                guest_name: ActiveValue::Set(params.guest_name),
                guest_number: ActiveValue::Set(params.guest_number),
                item_name: ActiveValue::Set(params.item_name),
                quantity_claimed: ActiveValue::Set(params.quantity),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(txn)
            .await?
        }
    };

    let item = adjust_counter(txn, item, params.quantity).await?;

    Ok(ClaimOutcome::Done(ClaimChange {
        claim: Claim::from_entity(claim),
        item: Item::from_entity(item),
    }))
}

async fn set_quantity_in(
    txn: &DatabaseTransaction,
    guest_name: &str,
    guest_number: &str,
    item_name: &str,
    quantity: i32,
) -> Result<ClaimOutcome<ClaimChange>, DbErr> {
    let Some(item) = lock_item(txn, item_name).await? else {
        return Ok(ClaimOutcome::ItemNotFound);
    };

    let Some(existing) = entity::prelude::GuestItem::find_by_id((
        guest_name.to_string(),
        guest_number.to_string(),
        item_name.to_string(),
    ))
    .one(txn)
    .await?
    else {
        return Ok(ClaimOutcome::ClaimNotFound);
    };

    let delta = quantity - existing.quantity_claimed;
    let available = item.item_count - item.claimed_count;
    if delta > available {
        return Ok(ClaimOutcome::Insufficient {
            available: available.max(0),
        });
    }

    let mut claim = existing.into_active_model();
    claim.quantity_claimed = ActiveValue::Set(quantity);
    let claim = claim.update(txn).await?;

    let item = adjust_counter(txn, item, delta).await?;

    Ok(ClaimOutcome::Done(ClaimChange {
        claim: Claim::from_entity(claim),
        item: Item::from_entity(item),
    }))
}

async fn unclaim_in(
    txn: &DatabaseTransaction,
    guest_name: &str,
    guest_number: &str,
    item_name: &str,
) -> Result<ClaimOutcome<ClaimChange>, DbErr> {
    let Some(item) = lock_item(txn, item_name).await? else {
        return Ok(ClaimOutcome::ItemNotFound);
    };

    let Some(existing) = entity::prelude::GuestItem::find_by_id((
        guest_name.to_string(),
        guest_number.to_string(),
        item_name.to_string(),
    ))
    .one(txn)
    .await?
    else {
        return Ok(ClaimOutcome::ClaimNotFound);
    };

    entity::prelude::GuestItem::delete_by_id((
        guest_name.to_string(),
        guest_number.to_string(),
        item_name.to_string(),
    ))
    .exec(txn)
    .await?;

    let item = adjust_counter(txn, item, -existing.quantity_claimed).await?;

    Ok(ClaimOutcome::Done(ClaimChange {
        claim: Claim::from_entity(existing),
        item: Item::from_entity(item),
    }))
}

/// Reads an item row and holds a write lock on it until the transaction ends.
///
/// SQLite has no row locks and the statement is emitted without `FOR UPDATE`; its
/// writers are already serialized by the database lock.
pub(crate) async fn lock_item<C: ConnectionTrait>(
    conn: &C,
    item_name: &str,
) -> Result<Option<entity::item::Model>, DbErr> {
    entity::prelude::Item::find_by_id(item_name.to_string())
        .lock_exclusive()
        .one(conn)
        .await
}

/// Reads a guest row and holds a write lock on it until the transaction ends.
///
/// New claims take a shared lock on their guest, so none can be added for this guest
/// while the lock is held.
pub(crate) async fn lock_guest<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    number: &str,
) -> Result<Option<entity::guest::Model>, DbErr> {
    entity::prelude::Guest::find_by_id((name.to_string(), number.to_string()))
        .lock_exclusive()
        .one(conn)
        .await
}

/// Deletes the claims matching `filter` after releasing their units.
async fn remove_claims(
    txn: &DatabaseTransaction,
    filter: Condition,
) -> Result<Vec<Claim>, DbErr> {
    let claims = release_claims(txn, filter.clone()).await?;

    entity::prelude::GuestItem::delete_many()
        .filter(filter)
        .exec(txn)
        .await?;

    Ok(claims.into_iter().map(Claim::from_entity).collect())
}

/// Adds `delta` to the item's claimed counter, clamped at zero.
///
/// `item` must have been read through `lock_item` in the same transaction.
async fn adjust_counter(
    txn: &DatabaseTransaction,
    item: entity::item::Model,
    delta: i32,
) -> Result<entity::item::Model, DbErr> {
    let claimed_count = (item.claimed_count + delta).max(0);
    let mut item = item.into_active_model();
    item.claimed_count = ActiveValue::Set(claimed_count);
    item.updated_at = ActiveValue::Set(Utc::now());
    item.update(txn).await
}
