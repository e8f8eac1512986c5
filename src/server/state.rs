//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::time::Instant;

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `Instant` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Deployment environment name from `APP_ENV`.
    pub environment: String,

    /// When the server started, for the uptime reported by `/health`.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `environment` - Deployment environment name
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, environment: String) -> Self {
        Self {
            db,
            environment,
            started_at: Instant::now(),
        }
    }
}
