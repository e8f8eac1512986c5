//! User domain models and parameters.
//!
//! Users own guests. The stored password hash never leaves the repository layer, so
//! the domain model carries only the public profile.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserWithGuestsDto},
    server::{error::AppError, model::guest::Guest, util::parse::required},
};

/// Registered user identified by email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Email address, the primary key.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional phone number.
    pub number: Option<String>,
    /// Optional free-form role label.
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            email: self.email,
            name: self.name,
            number: self.number,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Drops the password hash.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            email: entity.email,
            name: entity.name,
            number: entity.number,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// User together with the guests they own.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithGuests {
    pub user: User,
    /// Owned guests, newest first.
    pub guests: Vec<Guest>,
}

impl UserWithGuests {
    pub fn into_dto(self) -> UserWithGuestsDto {
        UserWithGuestsDto {
            user: self.user.into_dto(),
            guests: self.guests.into_iter().map(Guest::into_summary_dto).collect(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub number: Option<String>,
    /// Plaintext when built from a request; the service replaces it with a hash
    /// before the repository sees it.
    pub password: String,
    pub role: Option<String>,
}

impl CreateUserParams {
    /// Converts the request body into create parameters.
    ///
    /// # Arguments
    /// - `dto` - Request body
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Email, name and password are present and non-blank
    /// - `Err(AppError::BadRequest)` - A required field is missing
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        match (required(dto.email), required(dto.name), required(dto.password)) {
            (Some(email), Some(name), Some(password)) => Ok(Self {
                email,
                name,
                number: dto.number,
                password,
                role: dto.role,
            }),
            _ => Err(AppError::BadRequest(
                "Email, name, and password are required".to_string(),
            )),
        }
    }
}

/// Parameters for a partial user update. `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub email: String,
    pub name: Option<String>,
    pub number: Option<String>,
    /// Plaintext from the request, hashed by the service.
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserParams {
    /// Blank names and passwords are treated as absent so they keep the stored value.
    pub fn from_dto(email: String, dto: UpdateUserDto) -> Self {
        Self {
            email,
            name: required(dto.name),
            number: dto.number,
            password: required(dto.password),
            role: dto.role,
        }
    }
}
