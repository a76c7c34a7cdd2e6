use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{model::system::DatabaseStatus, state::AppState};

/// Connectivity checks against the configured databases.
pub struct SystemService<'a> {
    state: &'a AppState,
}

impl<'a> SystemService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Pings the primary database.
    pub async fn database_up(&self) -> bool {
        ping(&self.state.db, "primary").await
    }

    /// Pings the primary and, when configured, the replica.
    pub async fn database_status(&self) -> DatabaseStatus {
        let backend = format!("{:?}", self.state.db.get_database_backend()).to_lowercase();
        let primary = ping(&self.state.db, "primary").await;
        let replica = match &self.state.replica {
            Some(replica) => Some(ping(replica, "replica").await),
            None => None,
        };

        DatabaseStatus {
            backend,
            primary,
            replica,
        }
    }
}

async fn ping(db: &DatabaseConnection, name: &str) -> bool {
    match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Ping to {} database failed: {}", name, e);
            false
        }
    }
}
