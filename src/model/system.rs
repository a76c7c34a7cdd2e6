use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoDto {
    pub name: String,
    pub version: String,
    /// Registered modules in registration order.
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// `ok` or `degraded`
    pub status: String,
    /// `up` or `down`
    pub database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppStatusDto {
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemInfoDto {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub os: String,
    pub arch: String,
    pub pid: u32,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DatabaseStatusDto {
    /// Database backend of the primary connection, e.g. `postgres`.
    pub backend: String,
    pub primary: bool,
    /// `None` when no read replica is configured.
    pub replica: Option<bool>,
}
