use axum::{http::StatusCode, response::Response};
use thiserror::Error;

use crate::server::error::envelope_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// Email unknown or password mismatch during login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// The current password supplied to change-password did not match.
    #[error("User {0} supplied a wrong current password")]
    WrongCurrentPassword(i32),

    /// The user lacks a required permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 "Usuário não autenticado"
/// - `InvalidCredentials` → 401 "E-mail ou senha inválidos"
/// - `WrongCurrentPassword` → 401 "Senha atual incorreta"
/// - `InactiveUser` → 403 "Usuário inativo"
/// - `AccessDenied` → 403 "Acesso negado"
///
/// The detailed error is logged at debug level; client-facing messages stay generic.
impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Usuário não autenticado")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos"),
            Self::WrongCurrentPassword(_) => (StatusCode::UNAUTHORIZED, "Senha atual incorreta"),
            Self::InactiveUser(_) => (StatusCode::FORBIDDEN, "Usuário inativo"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Acesso negado"),
        };

        envelope_response(status, message)
    }
}
