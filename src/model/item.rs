use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::claim::ItemClaimantDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ItemDto {
    pub item_name: String,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: i32,
    pub claimed_count: i32,
    /// `item_count - claimed_count`.
    pub available_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ItemWithGuestsDto {
    #[serde(flatten)]
    pub item: ItemDto,
    pub claims: Vec<ItemClaimantDto>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct CreateItemDto {
    pub item_name: Option<String>,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    /// Defaults to 1.
    pub item_count: Option<i32>,
}

/// Body of `PUT /api/items/{item_name}`. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateItemDto {
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: Option<i32>,
}

/// Body of `POST /api/items/{item_name}/claim`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct ClaimItemDto {
    pub guest_name: Option<String>,
    pub guest_number: Option<String>,
    /// Defaults to 1.
    pub quantity: Option<i32>,
}

/// Body of `POST /api/items/{item_name}/unclaim`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UnclaimItemDto {
    pub guest_name: Option<String>,
    pub guest_number: Option<String>,
}
