use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform envelope wrapping every API response, successful or not.
///
/// `code` always mirrors the HTTP status code of the response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub code: u16,
    pub meta: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload and a 200 code.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            code: 200,
            meta: None,
        }
    }

    /// Successful response with a payload and a 201 code.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            code: 201,
            ..Self::success(data, message)
        }
    }

    /// Successful response without payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            code: 200,
            meta: None,
        }
    }

    /// Failed response carrying only a message.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            code,
            meta: None,
        }
    }

    /// Failed response that still carries a payload, e.g. field errors or a health report.
    pub fn error_with_data(code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            ..Self::error(code, message)
        }
    }

    pub fn with_meta(mut self, meta: PaginationMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Pagination details attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of records across all pages.
    pub total: u64,
    /// Current page, starting at 1.
    pub page: u64,
    /// Records per page.
    pub limit: u64,
    pub total_pages: u64,
}

/// Placeholder payload type for responses whose `data` is always null.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyDto {}

/// Field validation failures, keyed by field name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub errors: BTreeMap<String, Vec<String>>,
}
