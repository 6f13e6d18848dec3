//! API handlers for the Web API.

pub mod auth;
pub mod board;

pub use auth::*;
pub use board::*;

use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle, opened at startup and closed at shutdown.
    pub db: Database,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
