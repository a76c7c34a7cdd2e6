//! UTF-8 handling for JSON bodies in both directions.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::{error::AppError, middleware::content_type::is_json};

/// Largest request body accepted for JSON normalization.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Normalizes JSON request bodies and JSON response content types.
///
/// Request bodies declared as JSON must be valid UTF-8 (400 otherwise) and lose a
/// leading byte order mark. JSON responses are labelled with `charset=utf-8`.
pub async fn normalize_json(req: Request, next: Next) -> Response {
    let req = if is_json(&req) {
        match normalize_request(req).await {
            Ok(req) => req,
            Err(err) => return with_charset(err.into_response()),
        }
    } else {
        req
    };

    with_charset(next.run(req).await)
}

async fn normalize_request(req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::BadRequest("Corpo da requisição inválido".to_string()))?;
    let bytes = strip_bom(bytes);

    if std::str::from_utf8(&bytes).is_err() {
        return Err(AppError::BadRequest(
            "Corpo da requisição deve ser UTF-8 válido".to_string(),
        ));
    }

    parts.headers.remove(header::TRANSFER_ENCODING);
    parts
        .headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()));

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

fn strip_bom(bytes: Bytes) -> Bytes {
    if bytes.starts_with(UTF8_BOM) {
        bytes.slice(UTF8_BOM.len()..)
    } else {
        bytes
    }
}

/// Replaces a bare `application/json` content type with its UTF-8 labelled form.
pub fn with_charset(mut response: Response) -> Response {
    let is_bare_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") && !value.contains("charset")
        });

    if is_bare_json {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    }

    response
}
