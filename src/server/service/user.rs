//! User service for business logic.
//!
//! Manages user accounts: listing, lookup, creation with password hashing, partial
//! updates and deletion. Email addresses are unique across all users.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use validator::Validate;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{PageRequest, Paginated},
        user::{CreateUserParams, UpdateUserParams, User},
    },
    service::password::PasswordHasher,
};

pub const EMAIL_TAKEN_MESSAGE: &str = "E-mail já cadastrado";

fn user_not_found() -> AppError {
    AppError::NotFound("Usuário não encontrado".to_string())
}

/// Maps a unique violation raced past the `email_taken` check to the same conflict.
pub(super) fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(EMAIL_TAKEN_MESSAGE),
        _ => err.into(),
    }
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Connection to run queries on; read-only handlers may pass the replica
    /// - `hasher` - Password hasher used when creating users
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Retrieves one page of users ordered by id.
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Users for the requested page with pagination totals
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn list(&self, request: PageRequest) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db).get_paginated(request).await?;

        let users = users
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(users, total, request))
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)?;

        User::from_entity(user)
    }

    /// Creates a user after validation and the email uniqueness check.
    ///
    /// Only the bcrypt hash of the password is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Invalid field values
    /// - `Err(AppError::BusinessLogic)` - Email already registered (409)
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        params.validate()?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_taken(&params.email, None).await? {
            return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = self.hasher.hash(&params.password).await?;
        let user = user_repo
            .create(&params, password_hash)
            .await
            .map_err(map_unique_violation)?;

        tracing::info!("Created user {} ({})", user.id, user.email);

        User::from_entity(user)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Validation)` - Invalid field values
    /// - `Err(AppError::BusinessLogic)` - New email belongs to another user (409)
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        params.validate()?;

        let user_repo = UserRepository::new(self.db);
        if let Some(email) = &params.email {
            if user_repo.email_taken(email, Some(params.id)).await? {
                return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
            }
        }

        let user = user_repo
            .update(params)
            .await
            .map_err(map_unique_violation)?
            .ok_or_else(user_not_found)?;

        User::from_entity(user)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found());
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
