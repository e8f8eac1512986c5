//! Item factory for creating test registry items.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    item_name: String,
    item_link: Option<String>,
    item_photo: Option<String>,
    item_count: i32,
    claimed_count: i32,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - item_name: `"Item {id}"`
    /// - item_link / item_photo: `None`
    /// - item_count: `5`
    /// - claimed_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            item_name: format!("Item {}", id),
            item_link: None,
            item_photo: None,
            item_count: 5,
            claimed_count: 0,
        }
    }

    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = item_name.into();
        self
    }

    pub fn item_link(mut self, item_link: impl Into<String>) -> Self {
        self.item_link = Some(item_link.into());
        self
    }

    pub fn item_photo(mut self, item_photo: impl Into<String>) -> Self {
        self.item_photo = Some(item_photo.into());
        self
    }

    pub fn item_count(mut self, item_count: i32) -> Self {
        self.item_count = item_count;
        self
    }

    /// Sets the raw claimed counter without creating matching claims.
    ///
    /// Prefer `factory::claim` when the counter must agree with the junction rows.
    pub fn claimed_count(mut self, claimed_count: i32) -> Self {
        self.claimed_count = claimed_count;
        self
    }

    /// Builds and inserts the item entity into the database.
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        let now = Utc::now();
        entity::item::ActiveModel {
            item_name: ActiveValue::Set(self.item_name),
            item_link: ActiveValue::Set(self.item_link),
            item_photo: ActiveValue::Set(self.item_photo),
            item_count: ActiveValue::Set(self.item_count),
            claimed_count: ActiveValue::Set(self.claimed_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item with default values (count 5, nothing claimed).
pub async fn create_item(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db).build().await
}

/// Creates an item wanting `item_count` units.
pub async fn create_item_with_count(
    db: &DatabaseConnection,
    item_count: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db).item_count(item_count).build().await
}
