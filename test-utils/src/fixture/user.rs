//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "host@example.com";

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test Host";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - email: `"host@example.com"`
/// - name: `"Test Host"`
/// - number: `None`
/// - password: `"not-a-real-hash"`
/// - role: `None`
/// - created_at / updated_at: `2025-01-01T00:00:00Z`
pub fn entity() -> user::Model {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    user::Model {
        email: DEFAULT_EMAIL.to_string(),
        name: DEFAULT_NAME.to_string(),
        number: None,
        password: "not-a-real-hash".to_string(),
        role: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
