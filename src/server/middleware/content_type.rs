use axum::{
    body::HttpBody,
    extract::Request,
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::error::AppError;

/// Rejects POST, PUT and PATCH requests whose body is not declared as JSON.
///
/// Requests without a body pass through, so body-less actions such as logout work
/// without a content type.
pub async fn require_json_content_type(req: Request, next: Next) -> Response {
    if matches!(*req.method(), Method::POST | Method::PUT | Method::PATCH)
        && has_body(&req)
        && !is_json(&req)
    {
        return AppError::UnsupportedMediaType(
            "Content-Type deve ser application/json".to_string(),
        )
        .into_response();
    }

    next.run(req).await
}

fn has_body(req: &Request) -> bool {
    let headers = req.headers();
    if headers.contains_key(header::TRANSFER_ENCODING) {
        return true;
    }

    match headers.get(header::CONTENT_LENGTH) {
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .is_some_and(|length| length > 0),
        None => req.body().size_hint().exact() != Some(0),
    }
}

/// True when the declared media type is `application/json`, ignoring parameters
/// such as `charset`.
pub fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
