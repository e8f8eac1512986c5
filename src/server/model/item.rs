//! Item domain models and parameters.
//!
//! Items are registry entries identified by name. Each tracks how many units are
//! wanted (`item_count`) and how many guests have claimed (`claimed_count`).

use chrono::{DateTime, Utc};

use crate::{
    model::item::{CreateItemDto, ItemDto, ItemWithGuestsDto, UpdateItemDto},
    server::{error::AppError, model::claim::ItemClaimant, util::parse::required},
};

/// Registry item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub item_name: String,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    /// Units wanted.
    pub item_count: i32,
    /// Units claimed across all guests.
    pub claimed_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Units still open for claiming, never negative.
    pub fn available_count(&self) -> i32 {
        (self.item_count - self.claimed_count).max(0)
    }

    pub fn into_dto(self) -> ItemDto {
        let available_count = self.available_count();
        ItemDto {
            item_name: self.item_name,
            item_link: self.item_link,
            item_photo: self.item_photo,
            item_count: self.item_count,
            claimed_count: self.claimed_count,
            available_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            item_name: entity.item_name,
            item_link: entity.item_link,
            item_photo: entity.item_photo,
            item_count: entity.item_count,
            claimed_count: entity.claimed_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Item together with the guests that claimed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithClaims {
    pub item: Item,
    pub claims: Vec<ItemClaimant>,
}

impl ItemWithClaims {
    pub fn into_dto(self) -> ItemWithGuestsDto {
        ItemWithGuestsDto {
            item: self.item.into_dto(),
            claims: self.claims.into_iter().map(ItemClaimant::into_dto).collect(),
        }
    }
}

/// Parameters for creating an item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub item_name: String,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: i32,
}

impl CreateItemParams {
    /// Converts the request body into create parameters.
    ///
    /// `item_count` defaults to 1.
    ///
    /// # Returns
    /// - `Ok(CreateItemParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - Name missing or count negative
    pub fn from_dto(dto: CreateItemDto) -> Result<Self, AppError> {
        let item_name = required(dto.item_name)
            .ok_or_else(|| AppError::BadRequest("Item name is required".to_string()))?;

        let item_count = dto.item_count.unwrap_or(1);
        if item_count < 0 {
            return Err(AppError::BadRequest(
                "Item count cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            item_name,
            item_link: dto.item_link,
            item_photo: dto.item_photo,
            item_count,
        })
    }
}

/// Parameters for a partial item update. `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub item_name: String,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: Option<i32>,
}

impl UpdateItemParams {
    /// # Returns
    /// - `Ok(UpdateItemParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - Count is negative
    pub fn from_dto(item_name: String, dto: UpdateItemDto) -> Result<Self, AppError> {
        if dto.item_count.is_some_and(|count| count < 0) {
            return Err(AppError::BadRequest(
                "Item count cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            item_name,
            item_link: dto.item_link,
            item_photo: dto.item_photo,
            item_count: dto.item_count,
        })
    }
}

/// Result of an item update.
///
/// Every variant except `Done` means the transaction was rolled back.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    Done(Item),
    NotFound,
    /// The new count would drop below the units already claimed.
    BelowClaimed { claimed_count: i32 },
}
