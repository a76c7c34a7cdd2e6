use crate::model::system::DatabaseStatusDto;

/// Result of pinging the configured databases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStatus {
    /// Backend of the primary connection, e.g. `postgres`.
    pub backend: String,
    pub primary: bool,
    /// `None` when no replica is configured.
    pub replica: Option<bool>,
}

impl DatabaseStatus {
    /// True when every configured connection answered.
    pub fn all_up(&self) -> bool {
        self.primary && self.replica.unwrap_or(true)
    }

    pub fn into_dto(self) -> DatabaseStatusDto {
        DatabaseStatusDto {
            backend: self.backend,
            primary: self.primary,
            replica: self.replica,
        }
    }
}
