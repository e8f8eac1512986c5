use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::guest::GuestSummaryDto;

/// User as returned by the API. The password hash is never serialized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub name: String,
    pub number: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserWithGuestsDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub guests: Vec<GuestSummaryDto>,
}

/// Body of `POST /api/users`. Email, name and password are required; they are
/// optional here so a missing field yields the API's own 400 message.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub number: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Body of `PUT /api/users/{email}`. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub number: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}
