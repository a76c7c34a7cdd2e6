//! Password authentication and account status management.

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        status::RecordStatus,
        user::{ChangePasswordParams, LoginParams, User},
    },
    service::password::PasswordHasher,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Checks login credentials.
    ///
    /// The password is verified before the account status so an inactive account is
    /// only revealed to someone who knows its password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::InactiveUser)` - Correct credentials for a deactivated user
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        params.validate()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(&params.password, &user.password).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(user)?;
        if !user.is_active() {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }

    /// Replaces a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::Validation)` - New password too short
    /// - `Err(AuthError::WrongCurrentPassword)` - Current password mismatch
    /// - `Err(AuthError::UserNotInDatabase)` - User was deleted meanwhile
    pub async fn change_password(&self, params: ChangePasswordParams) -> Result<(), AppError> {
        params.validate()?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(params.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(params.user_id).into());
        };

        if !self
            .hasher
            .verify(&params.current_password, &user.password)
            .await?
        {
            return Err(AuthError::WrongCurrentPassword(user.id).into());
        }

        let password_hash = self.hasher.hash(&params.new_password).await?;
        if !user_repo.update_password(user.id, password_hash).await? {
            return Err(AuthError::UserNotInDatabase(user.id).into());
        }

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }

    /// Activates or deactivates a user on behalf of an admin.
    ///
    /// # Arguments
    /// - `acting_user_id` - Id of the admin performing the change
    /// - `id` - Id of the user to change
    /// - `status` - New status
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BusinessLogic)` - Admin tried to deactivate themselves (400)
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_status(
        &self,
        acting_user_id: i32,
        id: i32,
        status: RecordStatus,
    ) -> Result<User, AppError> {
        if acting_user_id == id && status == RecordStatus::Inactive {
            return Err(AppError::business(
                "Não é possível desativar o próprio usuário",
            ));
        }

        let user = UserRepository::new(self.db)
            .set_status(id, status.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        tracing::info!("User {} set user {} to {}", acting_user_id, id, status);

        User::from_entity(user)
    }
}
