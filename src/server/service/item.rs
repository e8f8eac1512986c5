//! Item service for business logic.
//!
//! Owns the registry rules around counts: an item's count may not drop below what
//! has already been claimed, and claims through the item endpoints are refused once
//! the item runs out.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{claim::ClaimRepository, item::ItemRepository},
    error::AppError,
    model::{
        claim::{ClaimOutcome, ClaimParams},
        item::{CreateItemParams, Item, ItemUpdate, ItemWithClaims, UpdateItemParams},
    },
};

/// Builds the 409 message for a claim that exceeds what remains.
pub(crate) fn insufficient(available: i32) -> AppError {
    AppError::Conflict(format!(
        "Not enough of this item available ({} remaining)",
        available
    ))
}

/// Service providing business logic for registry items.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    /// Creates a new ItemService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ItemService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Item>, AppError> {
        let repo = ItemRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    pub async fn get_claimed(&self) -> Result<Vec<Item>, AppError> {
        let repo = ItemRepository::new(self.db);
        Ok(repo.get_claimed().await?)
    }

    pub async fn get_unclaimed(&self) -> Result<Vec<Item>, AppError> {
        let repo = ItemRepository::new(self.db);
        Ok(repo.get_unclaimed().await?)
    }

    pub async fn get_by_guest(
        &self,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Vec<Item>, AppError> {
        let repo = ItemRepository::new(self.db);
        Ok(repo.get_by_guest(guest_name, guest_number).await?)
    }

    /// Retrieves an item by name.
    ///
    /// # Returns
    /// - `Ok(Item)` - Item found
    /// - `Err(AppError::NotFound)` - No item with that name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, item_name: &str) -> Result<Item, AppError> {
        let repo = ItemRepository::new(self.db);

        repo.find_by_name(item_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    pub async fn get_with_claims(&self, item_name: &str) -> Result<ItemWithClaims, AppError> {
        let repo = ItemRepository::new(self.db);

        repo.get_with_claims(item_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    /// Creates an item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(AppError::Conflict)` - Name already taken
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        let repo = ItemRepository::new(self.db);

        let item = repo.create(params).await.map_err(|e| {
            AppError::from_constraint(
                e,
                "Item with this name already exists",
                "Referenced resource does not exist",
            )
        })?;

        Ok(item)
    }

    /// Applies a partial update to an item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::NotFound)` - No item with that name
    /// - `Err(AppError::Conflict)` - New count is below the claimed count
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateItemParams) -> Result<Item, AppError> {
        let repo = ItemRepository::new(self.db);

        match repo.update(params).await? {
            ItemUpdate::Done(item) => Ok(item),
            ItemUpdate::NotFound => Err(AppError::NotFound("Item not found".to_string())),
            ItemUpdate::BelowClaimed { claimed_count } => Err(AppError::Conflict(format!(
                "Item count cannot be lower than the {} already claimed",
                claimed_count
            ))),
        }
    }

    /// Deletes an item and its claims.
    pub async fn delete(&self, item_name: &str) -> Result<Item, AppError> {
        let repo = ItemRepository::new(self.db);

        repo.delete(item_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    /// Claims units of an item for a guest and returns the updated item.
    ///
    /// # Returns
    /// - `Ok(Item)` - Item with its counter incremented
    /// - `Err(AppError::NotFound)` - No item with that name
    /// - `Err(AppError::BadRequest)` - Guest does not exist
    /// - `Err(AppError::Conflict)` - Not enough units left
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn claim(&self, params: ClaimParams) -> Result<Item, AppError> {
        let claim_repo = ClaimRepository::new(self.db);

        match claim_repo.claim(params).await? {
            ClaimOutcome::Done(change) => Ok(change.item),
            ClaimOutcome::ItemNotFound => Err(AppError::NotFound("Item not found".to_string())),
            ClaimOutcome::GuestNotFound => {
                Err(AppError::BadRequest("Guest does not exist".to_string()))
            }
            ClaimOutcome::Insufficient { available } => Err(insufficient(available)),
            ClaimOutcome::ClaimNotFound => Err(AppError::NotFound("Claim not found".to_string())),
        }
    }

    /// Releases a guest's claim on an item and returns the updated item.
    ///
    /// # Returns
    /// - `Ok(Item)` - Item with its counter decremented
    /// - `Err(AppError::NotFound)` - No such claim or item
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn unclaim(
        &self,
        item_name: &str,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Item, AppError> {
        let claim_repo = ClaimRepository::new(self.db);

        match claim_repo
            .unclaim(guest_name, guest_number, item_name)
            .await?
        {
            ClaimOutcome::Done(change) => Ok(change.item),
            ClaimOutcome::ItemNotFound => Err(AppError::NotFound("Item not found".to_string())),
            _ => Err(AppError::NotFound("Claim not found".to_string())),
        }
    }
}
