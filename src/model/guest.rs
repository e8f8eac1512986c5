use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::claim::ClaimedItemDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuestDto {
    pub name: String,
    pub number: String,
    pub user_email: Option<String>,
    pub going: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact guest listing embedded in a user's detail view.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuestSummaryDto {
    pub name: String,
    pub number: String,
    pub going: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuestWithItemsDto {
    #[serde(flatten)]
    pub guest: GuestDto,
    pub claimed_items: Vec<ClaimedItemDto>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct CreateGuestDto {
    pub name: Option<String>,
    pub number: Option<String>,
    pub user_email: Option<String>,
    /// Defaults to `true`.
    pub going: Option<bool>,
}

/// Body of `PUT /api/guests/{name}/{number}`. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateGuestDto {
    pub user_email: Option<String>,
    pub going: Option<bool>,
}
