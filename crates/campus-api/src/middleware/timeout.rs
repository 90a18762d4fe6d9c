//! Per-request deadline.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use campus_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Fails the request with 503 once `server.request_timeout_seconds` elapses.
///
/// Dropping the handler future drops any open transaction, which rolls back.
pub async fn request_timeout(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let limit = Duration::from_secs(state.config.server.request_timeout_seconds);
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::from(AppError::service_unavailable("Request timed out")).into_response(),
    }
}
