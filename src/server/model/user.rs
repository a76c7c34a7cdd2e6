//! User domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::{
        auth::{ChangePasswordDto, LoginDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        model::status::RecordStatus,
        util::validation::{not_blank, valid_role, valid_status},
    },
};

/// Access level of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account with its stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    pub role: Role,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role or status is outside
    ///   the known values
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|value| InternalError::InvalidStoredValue {
                column: "user.role",
                value,
            })?;
        let status =
            entity
                .status
                .parse::<RecordStatus>()
                .map_err(|value| InternalError::InvalidStoredValue {
                    column: "user.status",
                    value,
                })?;

        Ok(Self {
            id: entity.id,
            uuid: entity.uuid,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            role,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == RecordStatus::Active
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            uuid: self.uuid,
            name: self.name,
            email: self.email,
            role: self.role.to_string(),
            status: self.status.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Emails are compared case-insensitively; store them trimmed and lowercase.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parameters for creating a user.
#[derive(Debug, Clone, Validate)]
pub struct CreateUserParams {
    #[validate(
        length(min = 1, max = 255, message = "Nome deve ter entre 1 e 255 caracteres"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(length(min = 6, message = "Senha deve ter no mínimo 6 caracteres"))]
    pub password: String,
    #[validate(custom(function = "valid_role"))]
    pub role: String,
    #[validate(custom(function = "valid_status"))]
    pub status: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            role: dto.role.unwrap_or_else(|| Role::User.to_string()),
            status: dto
                .status
                .unwrap_or_else(|| RecordStatus::Active.to_string()),
        }
    }

    /// Whether the new account would hold the admin role.
    pub fn grants_admin(&self) -> bool {
        self.role == Role::Admin.as_str()
    }
}

/// Parameters for a partial user update. `None` fields keep their stored value.
#[derive(Debug, Clone, Validate)]
pub struct UpdateUserParams {
    pub id: i32,
    #[validate(
        length(min = 1, max = 255, message = "Nome deve ter entre 1 e 255 caracteres"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    #[validate(email(message = "E-mail inválido"))]
    pub email: Option<String>,
    #[validate(custom(function = "valid_role"))]
    pub role: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            email: dto.email.as_deref().map(normalize_email),
            role: dto.role,
        }
    }

    pub fn changes_role(&self) -> bool {
        self.role.is_some()
    }
}

#[derive(Debug, Clone, Validate)]
pub struct LoginParams {
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ChangePasswordParams {
    pub user_id: i32,
    #[validate(length(min = 1, message = "Senha atual é obrigatória"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "Senha deve ter no mínimo 6 caracteres"))]
    pub new_password: String,
}

impl ChangePasswordParams {
    pub fn from_dto(user_id: i32, dto: ChangePasswordDto) -> Self {
        Self {
            user_id,
            current_password: dto.current_password,
            new_password: dto.new_password,
        }
    }
}
