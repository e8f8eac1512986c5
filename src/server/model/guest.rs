//! Guest domain models and parameters.
//!
//! Guests are identified by the pair of name and phone number, optionally belong to a
//! user, and carry an RSVP flag.

use chrono::{DateTime, Utc};

use crate::{
    model::guest::{CreateGuestDto, GuestDto, GuestSummaryDto, GuestWithItemsDto, UpdateGuestDto},
    server::{error::AppError, model::claim::ClaimedItem, util::parse::required},
};

/// Guest invited to the event.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub name: String,
    pub number: String,
    /// Email of the owning user, if any.
    pub user_email: Option<String>,
    /// RSVP flag.
    pub going: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            name: self.name,
            number: self.number,
            user_email: self.user_email,
            going: self.going,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts to the compact form embedded in a user's detail view.
    pub fn into_summary_dto(self) -> GuestSummaryDto {
        GuestSummaryDto {
            name: self.name,
            number: self.number,
            going: self.going,
        }
    }

    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            name: entity.name,
            number: entity.number,
            user_email: entity.user_email,
            going: entity.going,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Guest together with every item they have claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestWithItems {
    pub guest: Guest,
    pub claimed_items: Vec<ClaimedItem>,
}

impl GuestWithItems {
    pub fn into_dto(self) -> GuestWithItemsDto {
        GuestWithItemsDto {
            guest: self.guest.into_dto(),
            claimed_items: self
                .claimed_items
                .into_iter()
                .map(ClaimedItem::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a guest.
#[derive(Debug, Clone)]
pub struct CreateGuestParams {
    pub name: String,
    pub number: String,
    pub user_email: Option<String>,
    pub going: bool,
}

impl CreateGuestParams {
    /// Converts the request body into create parameters.
    ///
    /// `going` defaults to `true` and a blank `user_email` is treated as absent.
    ///
    /// # Returns
    /// - `Ok(CreateGuestParams)` - Name and number are present
    /// - `Err(AppError::BadRequest)` - Name or number is missing
    pub fn from_dto(dto: CreateGuestDto) -> Result<Self, AppError> {
        let (Some(name), Some(number)) = (required(dto.name), required(dto.number)) else {
            return Err(AppError::BadRequest(
                "Name and number are required".to_string(),
            ));
        };

        Ok(Self {
            name,
            number,
            user_email: required(dto.user_email),
            going: dto.going.unwrap_or(true),
        })
    }
}

/// Parameters for a partial guest update. `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateGuestParams {
    pub name: String,
    pub number: String,
    pub user_email: Option<String>,
    pub going: Option<bool>,
}

impl UpdateGuestParams {
    pub fn from_dto(name: String, number: String, dto: UpdateGuestDto) -> Self {
        Self {
            name,
            number,
            user_email: required(dto.user_email),
            going: dto.going,
        }
    }
}
