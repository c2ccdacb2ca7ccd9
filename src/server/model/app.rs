//! Shared application state handed to every request handler.

use sea_orm::DatabaseConnection;

/// State cloned into each handler; the connection pool is internally shared.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the marketplace database
    pub db: DatabaseConnection,
}
