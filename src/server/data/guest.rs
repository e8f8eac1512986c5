//! Guest data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    Condition, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::claim::{lock_guest, release_claims, rollback},
    model::{
        claim::ClaimedItem,
        guest::{CreateGuestParams, Guest, GuestWithItems, UpdateGuestParams},
    },
};

/// Repository providing database operations for guests.
///
/// Guests are addressed by their composite key of name and phone number.
pub struct GuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all guests, newest first.
    pub async fn get_all(&self) -> Result<Vec<Guest>, DbErr> {
        let entities = entity::prelude::Guest::find()
            .order_by_desc(entity::guest::Column::CreatedAt)
            .order_by_asc(entity::guest::Column::Name)
            .order_by_asc(entity::guest::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guest::from_entity).collect())
    }

    /// Finds a guest by name and number.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - Guest found
    /// - `Ok(None)` - No guest with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_key(&self, name: &str, number: &str) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find_by_id((name.to_string(), number.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Gets the guests owned by a user, newest first.
    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Guest>, DbErr> {
        let entities = entity::prelude::Guest::find()
            .filter(entity::guest::Column::UserEmail.eq(user_email))
            .order_by_desc(entity::guest::Column::CreatedAt)
            .order_by_asc(entity::guest::Column::Name)
            .order_by_asc(entity::guest::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guest::from_entity).collect())
    }

    /// Creates a new guest.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest
    /// - `Err(DbErr)` - Duplicate key, unknown owner email, or other database error
    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, DbErr> {
        let now = Utc::now();
        let entity = entity::guest::ActiveModel {
            name: ActiveValue::Set(params.name),
            number: ActiveValue::Set(params.number),
            user_email: ActiveValue::Set(params.user_email),
            going: ActiveValue::Set(params.going),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(entity))
    }

    /// Applies a partial update to a guest's owner and RSVP flag.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - The updated guest
    /// - `Ok(None)` - No guest with that key
    /// - `Err(DbErr)` - Unknown owner email or other database error
    pub async fn update(&self, params: UpdateGuestParams) -> Result<Option<Guest>, DbErr> {
        let Some(existing) =
            entity::prelude::Guest::find_by_id((params.name.clone(), params.number.clone()))
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut guest = existing.into_active_model();
        if let Some(user_email) = params.user_email {
            guest.user_email = ActiveValue::Set(Some(user_email));
        }
        if let Some(going) = params.going {
            guest.going = ActiveValue::Set(going);
        }
        guest.updated_at = ActiveValue::Set(Utc::now());

        let entity = guest.update(self.db).await?;

        Ok(Some(Guest::from_entity(entity)))
    }

    /// Deletes a guest and releases their claims.
    ///
    /// Runs in a transaction: the guest's claimed units are subtracted from the item
    /// counters and the claims removed before the guest row is deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - The deleted guest
    /// - `Ok(None)` - No guest with that key, nothing changed
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn delete(&self, name: &str, number: &str) -> Result<Option<Guest>, DbErr> {
        let txn = self.db.begin().await?;

        match delete_in(&txn, name, number).await {
            Ok(Some(guest)) => {
                txn.commit().await?;
                Ok(Some(guest))
            }
            Ok(None) => {
                txn.rollback().await?;
                Ok(None)
            }
            Err(err) => Err(rollback(txn, err).await),
        }
    }

    /// Gets a guest with every item they have claimed.
    ///
    /// # Returns
    /// - `Ok(Some(GuestWithItems))` - Guest found; claims newest first
    /// - `Ok(None)` - No guest with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_with_items(
        &self,
        name: &str,
        number: &str,
    ) -> Result<Option<GuestWithItems>, DbErr> {
        let Some(guest) = self.find_by_key(name, number).await? else {
            return Ok(None);
        };

        let claims = entity::prelude::GuestItem::find()
            .filter(entity::guest_item::Column::GuestName.eq(name))
            .filter(entity::guest_item::Column::GuestNumber.eq(number))
            .find_also_related(entity::prelude::Item)
            .order_by_desc(entity::guest_item::Column::CreatedAt)
            .order_by_asc(entity::guest_item::Column::ItemName)
            .all(self.db)
            .await?;

        let claimed_items = claims
            .into_iter()
            .filter_map(|(claim, item)| item.map(|item| ClaimedItem::from_entity(claim, item)))
            .collect();

        Ok(Some(GuestWithItems {
            guest,
            claimed_items,
        }))
    }
}

async fn delete_in(
    txn: &DatabaseTransaction,
    name: &str,
    number: &str,
) -> Result<Option<Guest>, DbErr> {
    let Some(guest) = lock_guest(txn, name, number).await? else {
        return Ok(None);
    };

    let filter = Condition::all()
        .add(entity::guest_item::Column::GuestName.eq(name))
        .add(entity::guest_item::Column::GuestNumber.eq(number));

    release_claims(txn, filter.clone()).await?;

    entity::prelude::GuestItem::delete_many()
        .filter(filter)
        .exec(txn)
        .await?;

    entity::prelude::Guest::delete_by_id((name.to_string(), number.to_string()))
        .exec(txn)
        .await?;

    Ok(Some(Guest::from_entity(guest)))
}
