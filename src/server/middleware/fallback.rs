use std::any::Any;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

use crate::server::{
    error::{envelope_response, AppError, INTERNAL_ERROR_MESSAGE},
    middleware::json::JSON_UTF8,
};

/// Router fallback for paths no module registered.
pub async fn not_found() -> AppError {
    AppError::NotFound("Rota não encontrada".to_string())
}

/// Fallback for registered paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Renders a caught handler panic as the 500 envelope.
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);

    let mut response = envelope_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE);
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    response
}
