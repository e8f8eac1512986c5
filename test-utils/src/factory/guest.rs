//! Guest factory for creating test guest entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guests with customizable fields.
///
/// Guests have a composite key of name and number; both default to unique values.
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    number: String,
    user_email: Option<String>,
    going: bool,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Guest {id}"`
    /// - number: `"555-{id}"`
    /// - user_email: `None`
    /// - going: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Guest {}", id),
            number: format!("555-{:04}", id),
            user_email: None,
            going: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the owning user. The user must already exist.
    pub fn user_email(mut self, user_email: impl Into<String>) -> Self {
        self.user_email = Some(user_email.into());
        self
    }

    pub fn going(mut self, going: bool) -> Self {
        self.going = going;
        self
    }

    /// Builds and inserts the guest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guest::Model)` - Created guest entity
    /// - `Err(DbErr)` - Database error during insert (including unknown owning user)
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        let now = Utc::now();
        entity::guest::ActiveModel {
            name: ActiveValue::Set(self.name),
            number: ActiveValue::Set(self.number),
            user_email: ActiveValue::Set(self.user_email),
            going: ActiveValue::Set(self.going),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest without an owning user.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db).build().await
}

/// Creates a guest owned by the user with the given email.
pub async fn create_guest_for_user(
    db: &DatabaseConnection,
    user_email: &str,
) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db).user_email(user_email).build().await
}
