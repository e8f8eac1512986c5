//! Item data repository for database operations.
//!
//! Provides `ItemRepository` for registry items. Counter maintenance for claims lives
//! in the claim repository; this module only reads `claimed_count` and never writes it
//! after creation. Updates and deletes lock the item row the same way claims do.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::claim::{lock_item, rollback},
    model::{
        claim::ItemClaimant,
        item::{CreateItemParams, Item, ItemUpdate, ItemWithClaims, UpdateItemParams},
    },
};

/// Repository providing database operations for registry items.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    /// Creates a new ItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ItemRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all items, newest first.
    pub async fn get_all(&self) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .order_by_desc(entity::item::Column::CreatedAt)
            .order_by_asc(entity::item::Column::ItemName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Finds an item by name.
    ///
    /// # Returns
    /// - `Ok(Some(Item))` - Item found
    /// - `Ok(None)` - No item with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, item_name: &str) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(item_name.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Gets items with at least one unit claimed.
    pub async fn get_claimed(&self) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::ClaimedCount.gt(0))
            .order_by_desc(entity::item::Column::CreatedAt)
            .order_by_asc(entity::item::Column::ItemName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets items with at least one unit still available.
    pub async fn get_unclaimed(&self) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(
                Expr::col(entity::item::Column::ClaimedCount)
                    .lt(Expr::col(entity::item::Column::ItemCount)),
            )
            .order_by_desc(entity::item::Column::CreatedAt)
            .order_by_asc(entity::item::Column::ItemName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets the items a guest has claimed, most recently claimed first.
    ///
    /// # Arguments
    /// - `guest_name` - Guest name
    /// - `guest_number` - Guest phone number
    ///
    /// # Returns
    /// - `Ok(Vec<Item>)` - Claimed items, empty if the guest has none or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guest(
        &self,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Vec<Item>, DbErr> {
        let rows = entity::prelude::GuestItem::find()
            .filter(entity::guest_item::Column::GuestName.eq(guest_name))
            .filter(entity::guest_item::Column::GuestNumber.eq(guest_number))
            .find_also_related(entity::prelude::Item)
            .order_by_desc(entity::guest_item::Column::CreatedAt)
            .order_by_asc(entity::guest_item::Column::ItemName)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, item)| item.map(Item::from_entity))
            .collect())
    }

    /// Creates a new item with nothing claimed.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(DbErr)` - Duplicate name (unique violation) or other database error
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, DbErr> {
        let now = Utc::now();
        let entity = entity::item::ActiveModel {
            item_name: ActiveValue::Set(params.item_name),
            item_link: ActiveValue::Set(params.item_link),
            item_photo: ActiveValue::Set(params.item_photo),
            item_count: ActiveValue::Set(params.item_count),
            claimed_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Applies a partial update to an item's link, photo and count.
    ///
    /// Runs in a transaction holding the item's row lock, so no claim can commit
    /// between the count check and the write.
    ///
    /// # Returns
    /// - `Ok(ItemUpdate::Done(Item))` - The updated item
    /// - `Ok(ItemUpdate::NotFound)` - No item with that name, rolled back
    /// - `Ok(ItemUpdate::BelowClaimed)` - New count is below `claimed_count`, rolled back
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn update(&self, params: UpdateItemParams) -> Result<ItemUpdate, DbErr> {
        let txn = self.db.begin().await?;

        match update_in(&txn, params).await {
            Ok(ItemUpdate::Done(item)) => {
                txn.commit().await?;
                Ok(ItemUpdate::Done(item))
            }
            Ok(refused) => {
                txn.rollback().await?;
                Ok(refused)
            }
            Err(err) => Err(rollback(txn, err).await),
        }
    }


    /// Deletes an item and every claim on it.
    ///
    /// # Returns
    /// - `Ok(Some(Item))` - The deleted item
    /// - `Ok(None)` - No item with that name
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn delete(&self, item_name: &str) -> Result<Option<Item>, DbErr> {
        let Some(item) = self.find_by_name(item_name).await? else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let deleted = delete_in(&txn, item_name).await;

        match deleted {
            Ok(rows_affected) if rows_affected > 0 => {
                txn.commit().await?;
                Ok(Some(item))
            }
            Ok(_) => {
                txn.rollback().await?;
                Ok(None)
            }
            Err(err) => Err(rollback(txn, err).await),
        }
    }

    /// Gets an item with the guests that claimed it.
    ///
    /// # Returns
    /// - `Ok(Some(ItemWithClaims))` - Item found; claims newest first
    /// - `Ok(None)` - No item with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_with_claims(&self, item_name: &str) -> Result<Option<ItemWithClaims>, DbErr> {
        let Some(item) = self.find_by_name(item_name).await? else {
            return Ok(None);
        };

        let claims = entity::prelude::GuestItem::find()
            .filter(entity::guest_item::Column::ItemName.eq(item_name))
            .find_also_related(entity::prelude::Guest)
            .order_by_desc(entity::guest_item::Column::CreatedAt)
            .order_by_asc(entity::guest_item::Column::GuestName)
            .all(self.db)
            .await?;

        Ok(Some(ItemWithClaims {
            item,
            claims: claims
                .into_iter()
                .map(|(claim, guest)| ItemClaimant::from_entity(claim, guest))
                .collect(),
        }))
    }
}

async fn update_in(
    txn: &DatabaseTransaction,
    params: UpdateItemParams,
) -> Result<ItemUpdate, DbErr> {
    let Some(existing) = lock_item(txn, &params.item_name).await? else {
        return Ok(ItemUpdate::NotFound);
    };

    if let Some(item_count) = params.item_count {
        if item_count < existing.claimed_count {
            return Ok(ItemUpdate::BelowClaimed {
                claimed_count: existing.claimed_count,
            });
        }
    }

    let mut item = existing.into_active_model();
    if let Some(item_link) = params.item_link {
        item.item_link = ActiveValue::Set(Some(item_link));
    }
    if let Some(item_photo) = params.item_photo {
        item.item_photo = ActiveValue::Set(Some(item_photo));
    }
    if let Some(item_count) = params.item_count {
        item.item_count = ActiveValue::Set(item_count);
    }
    item.updated_at = ActiveValue::Set(Utc::now());

    let entity = item.update(txn).await?;

    Ok(ItemUpdate::Done(Item::from_entity(entity)))
}

async fn delete_in(txn: &DatabaseTransaction, item_name: &str) -> Result<u64, DbErr> {
    lock_item(txn, item_name).await?;

    entity::prelude::GuestItem::delete_many()
        .filter(entity::guest_item::Column::ItemName.eq(item_name))
        .exec(txn)
        .await?;

    let result = entity::prelude::Item::delete_by_id(item_name.to_string())
        .exec(txn)
        .await?;

    Ok(result.rows_affected)
}
