//! Application state shared across all request handlers.
//!
//! The state holds the store connection created at startup. It is passed to the
//! router explicitly rather than kept in a global, and every handler borrows the
//! connection for the duration of its store operations.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloned for each incoming request via Axum's state extraction. Clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
