use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A claim joined with the claimed item's details and the guest's owning user.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimDto {
    pub guest_name: String,
    pub guest_number: String,
    pub item_name: String,
    pub quantity_claimed: i32,
    pub created_at: DateTime<Utc>,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: Option<i32>,
    pub user_email: Option<String>,
}

/// An item as seen from a guest's claim list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimedItemDto {
    pub item_name: String,
    pub quantity_claimed: i32,
    pub item_link: Option<String>,
    pub item_photo: Option<String>,
    pub item_count: i32,
    pub claimed_at: DateTime<Utc>,
}

/// A guest as seen from an item's claim list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ItemClaimantDto {
    pub guest_name: String,
    pub guest_number: String,
    pub quantity_claimed: i32,
    pub user_email: Option<String>,
    pub claimed_at: DateTime<Utc>,
}

/// Body of `POST /api/claims`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct CreateClaimDto {
    pub guest_name: Option<String>,
    pub guest_number: Option<String>,
    pub item_name: Option<String>,
    /// Defaults to 1.
    pub quantity: Option<i32>,
}

/// Body of `PUT /api/claims/{guest_name}/{guest_number}/{item_name}`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateClaimDto {
    pub quantity: Option<i32>,
}
