//! Typed path parameter extraction.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use campus_core::error::AppError;

use crate::error::ApiError;

/// A positive integer id taken from the single path parameter.
///
/// Non-numeric or non-positive segments are a `Validation` error.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr + Copy + Send,
    i32: From<T>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid path: {e}")))?;

        parse_id(&raw).map(IdPath).map_err(ApiError::from)
    }
}

/// Parse a positive id.
pub fn parse_id<T>(raw: &str) -> Result<T, AppError>
where
    T: FromStr + Copy,
    i32: From<T>,
{
    let id = raw
        .parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid id: {raw}")))?;
    if i32::from(id) < 1 {
        return Err(AppError::validation(format!("Invalid id: {raw}")));
    }
    Ok(id)
}
