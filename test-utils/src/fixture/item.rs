//! Item fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::item;

/// Default test item name.
pub const DEFAULT_NAME: &str = "Test Item";

/// Default number of units wanted.
pub const DEFAULT_ITEM_COUNT: i32 = 4;

/// Creates an item entity model with default values.
///
/// # Default Values
/// - item_name: `"Test Item"`
/// - item_link / item_photo: `None`
/// - item_count: `4`
/// - claimed_count: `0`
pub fn entity() -> item::Model {
    entity_builder().build()
}

/// Creates an item entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let item = fixture::item::entity_builder()
///     .item_count(3)
///     .claimed_count(2)
///     .build();
/// ```
pub fn entity_builder() -> ItemEntityBuilder {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    ItemEntityBuilder {
        model: item::Model {
            item_name: DEFAULT_NAME.to_string(),
            item_link: None,
            item_photo: None,
            item_count: DEFAULT_ITEM_COUNT,
            claimed_count: 0,
            created_at: timestamp,
            updated_at: timestamp,
        },
    }
}

/// Builder for in-memory item entity models.
pub struct ItemEntityBuilder {
    model: item::Model,
}

impl ItemEntityBuilder {
    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.model.item_name = item_name.into();
        self
    }

    pub fn item_link(mut self, item_link: impl Into<String>) -> Self {
        self.model.item_link = Some(item_link.into());
        self
    }

    pub fn item_photo(mut self, item_photo: impl Into<String>) -> Self {
        self.model.item_photo = Some(item_photo.into());
        self
    }

    pub fn item_count(mut self, item_count: i32) -> Self {
        self.model.item_count = item_count;
        self
    }

    pub fn claimed_count(mut self, claimed_count: i32) -> Self {
        self.model.claimed_count = claimed_count;
        self
    }

    pub fn build(self) -> item::Model {
        self.model
    }
}
