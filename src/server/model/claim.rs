//! Claim domain models and parameters.
//!
//! A claim is a row of the guest/item junction recording how many units of an item
//! a guest has taken. Claim-mutating repository calls report refusals through
//! `ClaimOutcome` so the service can choose the HTTP status and message.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        claim::{ClaimDto, ClaimedItemDto, CreateClaimDto, ItemClaimantDto},
        item::{ClaimItemDto, UnclaimItemDto},
    },
    server::{error::AppError, model::item::Item, util::parse::required},
};

/// Claim of an item by a guest.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub guest_name: String,
    pub guest_number: String,
    pub item_name: String,
    pub quantity_claimed: i32,
    pub created_at: DateTime<Utc>,
}

impl Claim {
    pub fn from_entity(entity: entity::guest_item::Model) -> Self {
        Self {
            guest_name: entity.guest_name,
            guest_number: entity.guest_number,
            item_name: entity.item_name,
            quantity_claimed: entity.quantity_claimed,
            created_at: entity.created_at,
        }
    }
}

/// Claim joined with the claimed item's details and the guest's owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimDetail {
    pub claim: Claim,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    /// `None` only if the item row vanished between queries.
    pub item_count: Option<i32>,
    pub user_email: Option<String>,
}

impl ClaimDetail {
    /// Joins a claim with its item and owning guest at the repository boundary.
    ///
    /// # Arguments
    /// - `claim` - Junction row
    /// - `item` - Claimed item, if it still exists
    /// - `guest` - Claiming guest, if it still exists
    pub fn from_entity(
        claim: entity::guest_item::Model,
        item: Option<entity::item::Model>,
        guest: Option<&entity::guest::Model>,
    ) -> Self {
        Self {
            claim: Claim::from_entity(claim),
            item_link: item.as_ref().and_then(|i| i.item_link.clone()),
            item_photo: item.as_ref().and_then(|i| i.item_photo.clone()),
            item_count: item.map(|i| i.item_count),
            user_email: guest.and_then(|g| g.user_email.clone()),
        }
    }

    pub fn into_dto(self) -> ClaimDto {
        ClaimDto {
            guest_name: self.claim.guest_name,
            guest_number: self.claim.guest_number,
            item_name: self.claim.item_name,
            quantity_claimed: self.claim.quantity_claimed,
            created_at: self.claim.created_at,
            item_link: self.item_link,
            item_photo: self.item_photo,
            item_count: self.item_count,
            user_email: self.user_email,
        }
    }
}

/// An item as listed under a guest.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimedItem {
    pub item_name: String,
    pub quantity_claimed: i32,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: i32,
    pub claimed_at: DateTime<Utc>,
}

impl ClaimedItem {
    pub fn from_entity(claim: entity::guest_item::Model, item: entity::item::Model) -> Self {
        Self {
            item_name: claim.item_name,
            quantity_claimed: claim.quantity_claimed,
            item_link: item.item_link,
            item_photo: item.item_photo,
            item_count: item.item_count,
            claimed_at: claim.created_at,
        }
    }

    pub fn into_dto(self) -> ClaimedItemDto {
        ClaimedItemDto {
            item_name: self.item_name,
            quantity_claimed: self.quantity_claimed,
            item_link: self.item_link,
            item_photo: self.item_photo,
            item_count: self.item_count,
            claimed_at: self.claimed_at,
        }
    }
}

/// A guest as listed under an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemClaimant {
    pub guest_name: String,
    pub guest_number: String,
    pub quantity_claimed: i32,
    pub user_email: Option<String>,
    pub claimed_at: DateTime<Utc>,
}

impl ItemClaimant {
    pub fn from_entity(
        claim: entity::guest_item::Model,
        guest: Option<entity::guest::Model>,
    ) -> Self {
        Self {
            guest_name: claim.guest_name,
            guest_number: claim.guest_number,
            quantity_claimed: claim.quantity_claimed,
            user_email: guest.and_then(|g| g.user_email),
            claimed_at: claim.created_at,
        }
    }

    pub fn into_dto(self) -> ItemClaimantDto {
        ItemClaimantDto {
            guest_name: self.guest_name,
            guest_number: self.guest_number,
            quantity_claimed: self.quantity_claimed,
            user_email: self.user_email,
            claimed_at: self.claimed_at,
        }
    }
}

/// Parameters for claiming units of an item.
#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub guest_name: String,
    pub guest_number: String,
    pub item_name: String,
    /// Always at least 1.
    pub quantity: i32,
}

impl ClaimParams {
    /// Builds parameters from `POST /api/claims`.
    ///
    /// # Returns
    /// - `Ok(ClaimParams)` - Valid parameters, quantity defaulted to 1
    /// - `Err(AppError::BadRequest)` - Missing field or quantity below 1
    pub fn from_dto(dto: CreateClaimDto) -> Result<Self, AppError> {
        let (Some(guest_name), Some(guest_number), Some(item_name)) = (
            required(dto.guest_name),
            required(dto.guest_number),
            required(dto.item_name),
        ) else {
            return Err(AppError::BadRequest(
                "Guest name, guest number, and item name are required".to_string(),
            ));
        };

        Ok(Self {
            guest_name,
            guest_number,
            item_name,
            quantity: parse_quantity(dto.quantity.or(Some(1)))?,
        })
    }

    /// Builds parameters from `POST /api/items/{item_name}/claim`.
    ///
    /// # Returns
    /// - `Ok(ClaimParams)` - Valid parameters, quantity defaulted to 1
    /// - `Err(AppError::BadRequest)` - Missing guest or quantity below 1
    pub fn from_item_dto(item_name: String, dto: ClaimItemDto) -> Result<Self, AppError> {
        let (Some(guest_name), Some(guest_number)) =
            (required(dto.guest_name), required(dto.guest_number))
        else {
            return Err(AppError::BadRequest(
                "Guest name and number are required to claim an item".to_string(),
            ));
        };

        Ok(Self {
            guest_name,
            guest_number,
            item_name,
            quantity: parse_quantity(dto.quantity.or(Some(1)))?,
        })
    }
}

/// Guest identifying a claim to release through `POST /api/items/{item_name}/unclaim`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclaimParams {
    pub guest_name: String,
    pub guest_number: String,
}

impl UnclaimParams {
    pub fn from_dto(dto: UnclaimItemDto) -> Result<Self, AppError> {
        match (required(dto.guest_name), required(dto.guest_number)) {
            (Some(guest_name), Some(guest_number)) => Ok(Self {
                guest_name,
                guest_number,
            }),
            _ => Err(AppError::BadRequest(
                "Guest name and number are required to unclaim an item".to_string(),
            )),
        }
    }
}

/// Validates a claim quantity.
///
/// # Returns
/// - `Ok(i32)` - Quantity of at least 1
/// - `Err(AppError::BadRequest)` - Quantity missing or below 1
pub fn parse_quantity(quantity: Option<i32>) -> Result<i32, AppError> {
    match quantity {
        Some(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(AppError::BadRequest("Valid quantity is required".to_string())),
    }
}

/// State of a claim and its item after a successful claim mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimChange {
    /// The claim as stored after the change, or as it was before removal.
    pub claim: Claim,
    /// The item with its updated counter.
    pub item: Item,
}

/// Result of a transactional claim mutation.
///
/// Every variant except `Done` means the transaction was rolled back.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome<T> {
    Done(T),
    ItemNotFound,
    GuestNotFound,
    ClaimNotFound,
    /// Not enough units left; `available` is what remained.
    Insufficient { available: i32 },
}
