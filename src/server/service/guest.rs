//! Guest service for business logic.
//!
//! Verifies that a referenced owner exists before writing so that the client gets a
//! specific message rather than a bare constraint failure.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guest::GuestRepository, user::UserRepository},
    error::AppError,
    model::guest::{CreateGuestParams, Guest, GuestWithItems, UpdateGuestParams},
};

const MISSING_USER: &str = "User email does not exist";

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all guests, newest first.
    pub async fn get_all(&self) -> Result<Vec<Guest>, AppError> {
        let repo = GuestRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    /// Retrieves the guests owned by a user. An unknown user yields an empty list.
    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Guest>, AppError> {
        let repo = GuestRepository::new(self.db);
        Ok(repo.get_by_user(user_email).await?)
    }

    /// Retrieves a guest by name and number.
    ///
    /// # Returns
    /// - `Ok(Guest)` - Guest found
    /// - `Err(AppError::NotFound)` - No guest with that key
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, name: &str, number: &str) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        repo.find_by_key(name, number)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Retrieves a guest with their claimed items.
    pub async fn get_with_items(&self, name: &str, number: &str) -> Result<GuestWithItems, AppError> {
        let repo = GuestRepository::new(self.db);

        repo.get_with_items(name, number)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Creates a guest.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest
    /// - `Err(AppError::BadRequest)` - Owner email does not belong to a user
    /// - `Err(AppError::Conflict)` - A guest with this name and number exists
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, AppError> {
        if let Some(user_email) = &params.user_email {
            self.require_user(user_email).await?;
        }

        let repo = GuestRepository::new(self.db);
        let guest = repo.create(params).await.map_err(|e| {
            AppError::from_constraint(
                e,
                "Guest with this name and number already exists",
                MISSING_USER,
            )
        })?;

        Ok(guest)
    }

    /// Updates a guest's owner and RSVP flag.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The updated guest
    /// - `Err(AppError::NotFound)` - No guest with that key
    /// - `Err(AppError::BadRequest)` - New owner email does not belong to a user
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn update(&self, params: UpdateGuestParams) -> Result<Guest, AppError> {
        if let Some(user_email) = &params.user_email {
            self.require_user(user_email).await?;
        }

        let repo = GuestRepository::new(self.db);
        repo.update(params)
            .await
            .map_err(|e| AppError::from_constraint(e, "Guest already exists", MISSING_USER))?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Deletes a guest, releasing their claims.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The deleted guest
    /// - `Err(AppError::NotFound)` - No guest with that key
    /// - `Err(AppError::DbErr)` - Database error, nothing deleted
    pub async fn delete(&self, name: &str, number: &str) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        repo.delete(name, number)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    async fn require_user(&self, user_email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.find_by_email(user_email).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(MISSING_USER.to_string())),
        }
    }
}
