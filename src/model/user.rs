use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as returned by the API. The password hash is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `admin` or `user`, defaults to `user`; `admin` requires an admin session
    #[serde(default)]
    pub role: Option<String>,
    /// `active` or `inactive`, defaults to `active`
    #[serde(default)]
    pub status: Option<String>,
}

/// Partial update; absent fields are left untouched.
///
/// Status is changed through the activate/deactivate endpoints and setting `role`
/// requires an admin session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
