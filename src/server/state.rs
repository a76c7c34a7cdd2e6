//! Application state shared across all request handlers.
//!
//! `AppState` is the container of shared services: it is built once during startup and
//! cloned into every handler through Axum's state extraction.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::password::PasswordHasher};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// remaining values sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Primary database connection used for writes and, by default, reads.
    pub db: DatabaseConnection,

    /// Optional read replica. List and detail queries go here when configured.
    pub replica: Option<DatabaseConnection>,

    pub config: Arc<Config>,

    /// Names of the registered modules, in registration order.
    pub modules: Arc<[&'static str]>,

    started_at: Instant,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Primary database connection pool
    /// - `replica` - Optional read replica connection pool
    /// - `config` - Loaded application configuration
    /// - `modules` - Names of the registered route providers
    pub fn new(
        db: DatabaseConnection,
        replica: Option<DatabaseConnection>,
        config: Config,
        modules: Vec<&'static str>,
    ) -> Self {
        Self {
            db,
            replica,
            config: Arc::new(config),
            modules: modules.into(),
            started_at: Instant::now(),
        }
    }

    /// Connection used for read-only queries.
    pub fn reader(&self) -> &DatabaseConnection {
        self.replica.as_ref().unwrap_or(&self.db)
    }

    /// Password hasher using the configured bcrypt cost.
    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.config.bcrypt_cost)
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
