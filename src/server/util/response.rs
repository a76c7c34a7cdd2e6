use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{model::api::ApiResponse, server::model::pagination::Paginated};

/// Renders the envelope with the HTTP status taken from its `code`.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response with pagination meta.
    pub fn paginated(page: Paginated<T>, message: impl Into<String>) -> Self {
        let meta = page.meta();
        ApiResponse::success(page.items, message).with_meta(meta)
    }
}
