//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the only two things requests
//! share: the session factory over the database pool and the read-only settings.

use std::sync::Arc;

use crate::server::{config::Config, session::SessionFactory};

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: the session factory wraps the pooled
/// `DatabaseConnection` and the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Opens one database session per request.
    pub sessions: SessionFactory,

    /// Immutable application settings.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `sessions` - Session factory backed by the database connection pool
    /// - `config` - Application configuration loaded at startup
    pub fn new(sessions: SessionFactory, config: Arc<Config>) -> Self {
        Self { sessions, config }
    }
}
