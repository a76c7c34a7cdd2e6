use super::test_hasher;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        status::RecordStatus,
        user::{ChangePasswordParams, LoginParams},
    },
    service::auth::AuthService,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod set_status;

/// Inserts a user whose password is `password`.
async fn user_with_password(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
    status: &str,
) -> Result<entity::user::Model, AppError> {
    let hash = test_hasher().hash(password).await?;

    Ok(factory::user::UserFactory::new(db)
        .email(email)
        .password_hash(hash)
        .status(status)
        .build()
        .await?)
}

fn login_params(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}
