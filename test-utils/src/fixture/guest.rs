//! Guest fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::guest;

/// Default test guest name.
pub const DEFAULT_NAME: &str = "Test Guest";

/// Default test guest number.
pub const DEFAULT_NUMBER: &str = "555-0100";

/// Creates a guest entity model with default values.
///
/// # Default Values
/// - name: `"Test Guest"`
/// - number: `"555-0100"`
/// - user_email: `None`
/// - going: `true`
pub fn entity() -> guest::Model {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    guest::Model {
        name: DEFAULT_NAME.to_string(),
        number: DEFAULT_NUMBER.to_string(),
        user_email: None,
        going: true,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
