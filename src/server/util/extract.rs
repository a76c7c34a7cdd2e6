//! Extractors that reject with the JSON error envelope instead of Axum's plain-text bodies.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::server::{error::AppError, model::pagination::PageRequest};

/// JSON request body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(match rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType(
                    "Content-Type deve ser application/json".to_string(),
                ),
                JsonRejection::JsonSyntaxError(e) => {
                    AppError::BadRequest(format!("JSON inválido: {}", e.body_text()))
                }
                JsonRejection::JsonDataError(e) => {
                    AppError::BadRequest(format!("Estrutura JSON inválida: {}", e.body_text()))
                }
                other => AppError::BadRequest(other.body_text()),
            }),
        }
    }
}

/// Numeric record id taken from the `{id}` path segment.
///
/// Ids are constrained to ASCII digits; anything else is treated as an unknown route and
/// answered with 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = || AppError::NotFound("Rota não encontrada".to_string());

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }

        raw.parse::<i32>().map(Self).map_err(|_| not_found())
    }
}

#[derive(Deserialize)]
struct PaginationParams {
    page: Option<u64>,
    limit: Option<u64>,
}

/// `page` and `limit` query parameters, normalized into a `PageRequest`.
pub struct PageQuery(pub PageRequest);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::BadRequest(
                    "Parâmetros de paginação inválidos: page e limit devem ser inteiros positivos"
                        .to_string(),
                )
            })?;

        Ok(Self(PageRequest::new(params.page, params.limit)))
    }
}
