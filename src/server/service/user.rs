//! User service for business logic.
//!
//! This module provides the `UserService` for managing users. It hashes passwords
//! before they are stored and maps repository results to application errors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User, UserWithGuests},
    util::password::hash_password,
};

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for user queries and mutations.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.get_all().await?)
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves a user with the guests they own.
    ///
    /// # Returns
    /// - `Ok(UserWithGuests)` - User found
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_with_guests(&self, email: &str) -> Result<UserWithGuests, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .get_with_guests(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates a user, hashing the password first.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalError)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, mut params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        params.password = hash_password(&params.password)?;

        let user = user_repo.create(params).await.map_err(|e| {
            AppError::from_constraint(
                e,
                "User with this email already exists",
                "Referenced resource does not exist",
            )
        })?;

        tracing::info!("Created user {}", user.email);

        Ok(user)
    }

    /// Applies a partial update, re-hashing the password when one is provided.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::InternalError)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, mut params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(password) = params.password.take() {
            params.password = Some(hash_password(&password)?);
        }

        user_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes a user, their guests, and the guests' claims.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error, nothing deleted
    pub async fn delete(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .delete(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("Deleted user {}", user.email);

        Ok(user)
    }
}
