//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, partial updates, queries, and deletion with proper
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    Condition, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::{
    data::claim::{release_claims, rollback},
    model::{
        guest::Guest,
        user::{CreateUserParams, UpdateUserParams, User, UserWithGuests},
    },
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by email.
    ///
    /// # Arguments
    /// - `email` - Email address of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(email.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Creates a new user.
    ///
    /// The password in `params` must already be hashed.
    ///
    /// # Arguments
    /// - `params` - User fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Duplicate email (unique violation) or other database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            number: ActiveValue::Set(params.number),
            password: ActiveValue::Set(params.password),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Applies a partial update to a user.
    ///
    /// Fields that are `None` in `params` keep their stored value. A password, if
    /// present, must already be hashed. `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.email.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user = existing.into_active_model();
        if let Some(name) = params.name {
            user.name = ActiveValue::Set(name);
        }
        if let Some(number) = params.number {
            user.number = ActiveValue::Set(Some(number));
        }
        if let Some(password) = params.password {
            user.password = ActiveValue::Set(password);
        }
        if let Some(role) = params.role {
            user.role = ActiveValue::Set(Some(role));
        }
        user.updated_at = ActiveValue::Set(Utc::now());

        let entity = user.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user together with their guests and the guests' claims.
    ///
    /// Runs in a transaction: releases the claimed units of every owned guest from
    /// the item counters, removes those claims and guests, then removes the user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user with that email, nothing changed
    /// - `Err(DbErr)` - Database error, rolled back
    pub async fn delete(&self, email: &str) -> Result<Option<User>, DbErr> {
        let txn = self.db.begin().await?;

        match delete_in(&txn, email).await {
            Ok(Some(user)) => {
                txn.commit().await?;
                Ok(Some(user))
            }
            Ok(None) => {
                txn.rollback().await?;
                Ok(None)
            }
            Err(err) => Err(rollback(txn, err).await),
        }
    }

    /// Gets a user with the guests they own.
    ///
    /// # Returns
    /// - `Ok(Some(UserWithGuests))` - User found; guests newest first
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_with_guests(&self, email: &str) -> Result<Option<UserWithGuests>, DbErr> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };

        let guests = entity::prelude::Guest::find()
            .filter(entity::guest::Column::UserEmail.eq(email))
            .order_by_desc(entity::guest::Column::CreatedAt)
            .order_by_asc(entity::guest::Column::Name)
            .all(self.db)
            .await?;

        Ok(Some(UserWithGuests {
            user,
            guests: guests.into_iter().map(Guest::from_entity).collect(),
        }))
    }
}

async fn delete_in(txn: &DatabaseTransaction, email: &str) -> Result<Option<User>, DbErr> {
    let Some(user) = entity::prelude::User::find_by_id(email.to_string())
        .one(txn)
        .await?
    else {
        return Ok(None);
    };

    // Locking the guests stops new claims for them until the deletion commits.
    let guests = entity::prelude::Guest::find()
        .filter(entity::guest::Column::UserEmail.eq(email))
        .order_by_asc(entity::guest::Column::Name)
        .order_by_asc(entity::guest::Column::Number)
        .lock_exclusive()
        .all(txn)
        .await?;

    if !guests.is_empty() {
        let filter = guests.iter().fold(Condition::any(), |filter, guest| {
            filter.add(
                Condition::all()
                    .add(entity::guest_item::Column::GuestName.eq(guest.name.as_str()))
                    .add(entity::guest_item::Column::GuestNumber.eq(guest.number.as_str())),
            )
        });

        release_claims(txn, filter.clone()).await?;

        entity::prelude::GuestItem::delete_many()
            .filter(filter)
            .exec(txn)
            .await?;
    }

    entity::prelude::Guest::delete_many()
        .filter(entity::guest::Column::UserEmail.eq(email))
        .exec(txn)
        .await?;

    entity::prelude::User::delete_by_id(email.to_string())
        .exec(txn)
        .await?;

    Ok(Some(User::from_entity(user)))
}
