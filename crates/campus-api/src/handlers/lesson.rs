//! Lesson handlers.

use axum::Json;
use axum::extract::State;

use campus_auth::rbac::Permission;
use campus_core::types::id::LessonId;
use campus_entity::lesson::Lesson;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath};
use crate::middleware::rbac::require;
use crate::state::AppState;

/// GET /api/lessons
pub async fn list_lessons(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Lesson>>>, ApiError> {
    require(&state, &auth, Permission::LessonView)?;
    Ok(Json(ApiResponse::ok(state.lesson_service.list().await?)))
}

/// GET /api/lessons/{id}
pub async fn get_lesson(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<LessonId>,
) -> Result<Json<ApiResponse<Lesson>>, ApiError> {
    require(&state, &auth, Permission::LessonView)?;
    Ok(Json(ApiResponse::ok(state.lesson_service.get(id).await?)))
}
