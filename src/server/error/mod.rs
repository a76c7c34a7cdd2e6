//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the response envelope. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements `IntoResponse`
//! so handlers can propagate failures with `?`.

pub mod auth;
pub mod config;
pub mod internal;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::{ApiResponse, EmptyDto, ValidationErrorsDto},
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Message returned to clients for every 5xx error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected state inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Password hashing or verification failure.
    #[error(transparent)]
    HashErr(#[from] bcrypt::BcryptError),

    /// Socket or filesystem error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request input failed field validation.
    ///
    /// Results in 422 Unprocessable Entity with the field errors in `data.errors`.
    #[error("Validation failed: {0:?}")]
    Validation(BTreeMap<String, Vec<String>>),

    /// A business rule rejected the operation, e.g. a duplicate email.
    ///
    /// Carries its own status code (400 or 409) and client-facing message.
    #[error("{message}")]
    BusinessLogic { status: StatusCode, message: String },

    /// Resource not found error.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, e.g. malformed JSON or query string.
    #[error("{0}")]
    BadRequest(String),

    /// Request body declared a content type other than JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Route exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// Business rule violation answered with 409 Conflict.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::BusinessLogic {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    /// Business rule violation answered with 400 Bad Request.
    pub fn business(message: impl Into<String>) -> Self {
        Self::BusinessLogic {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

/// Collects `validator` field errors into `field -> messages`.
///
/// Errors raised without an explicit message fall back to "Valor inválido".
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "Valor inválido".to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        AppError::Validation(fields)
    }
}

/// Builds an envelope response without payload.
pub fn envelope_response(status: StatusCode, message: impl Into<String>) -> Response {
    ApiResponse::<EmptyDto>::error(status.as_u16(), message).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and 400 business rules
/// - 404 Not Found - For `NotFound`
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 409 Conflict - For conflicting business rules
/// - 415 Unsupported Media Type - For `UnsupportedMediaType`
/// - 422 Unprocessable Entity - For `Validation`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => {
                tracing::debug!("Validation failed: {:?}", errors);
                ApiResponse::error_with_data(
                    StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                    ValidationErrorsDto { errors },
                    "Dados inválidos",
                )
                .into_response()
            }
            Self::BusinessLogic { status, message } => envelope_response(status, message),
            Self::NotFound(msg) => envelope_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => envelope_response(StatusCode::BAD_REQUEST, msg),
            Self::UnsupportedMediaType(msg) => {
                envelope_response(StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            Self::MethodNotAllowed => {
                envelope_response(StatusCode::METHOD_NOT_ALLOWED, "Método não permitido")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        envelope_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}
