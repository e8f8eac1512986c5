//! Claim factory for creating guest/item junction rows.
//!
//! Unlike the other factories, building a claim also adds its quantity to the
//! item's `claimed_count` so fixtures start from a consistent registry.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};

/// Factory for creating a claim of an item by a guest.
pub struct ClaimFactory<'a> {
    db: &'a DatabaseConnection,
    guest_name: String,
    guest_number: String,
    item_name: String,
    quantity: i32,
}

impl<'a> ClaimFactory<'a> {
    /// Creates a new ClaimFactory for the given guest and item with a quantity of 1.
    pub fn new(
        db: &'a DatabaseConnection,
        guest: &entity::guest::Model,
        item: &entity::item::Model,
    ) -> Self {
        Self {
            db,
            guest_name: guest.name.clone(),
            guest_number: guest.number.clone(),
            item_name: item.item_name.clone(),
            quantity: 1,
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Inserts the claim and increments the item's claimed counter.
    ///
    /// # Returns
    /// - `Ok(entity::guest_item::Model)` - Created claim
    /// - `Err(DbErr)` - Unknown guest/item or other database error
    pub async fn build(self) -> Result<entity::guest_item::Model, DbErr> {
        let claim = entity::guest_item::ActiveModel {
            guest_name: ActiveValue::Set(self.guest_name),
            guest_number: ActiveValue::Set(self.guest_number),
            item_name: ActiveValue::Set(self.item_name.clone()),
            quantity_claimed: ActiveValue::Set(self.quantity),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        let item = entity::prelude::Item::find_by_id(self.item_name.clone())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(self.item_name))?;

        let claimed_count = item.claimed_count + self.quantity;
        let mut item = item.into_active_model();
        item.claimed_count = ActiveValue::Set(claimed_count);
        item.update(self.db).await?;

        Ok(claim)
    }
}

/// Creates a claim of 1 unit of `item` by `guest`.
pub async fn create_claim(
    db: &DatabaseConnection,
    guest: &entity::guest::Model,
    item: &entity::item::Model,
) -> Result<entity::guest_item::Model, DbErr> {
    ClaimFactory::new(db, guest, item).build().await
}
