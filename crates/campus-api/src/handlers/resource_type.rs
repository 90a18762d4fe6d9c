//! Resource type handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_auth::rbac::Permission;
use campus_entity::resource_type::ResourceType;

use crate::dto::request::CreateResourceTypeRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::middleware::rbac::require;
use crate::state::AppState;

/// GET /api/resource-types
pub async fn list_resource_types(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ResourceType>>>, ApiError> {
    require(&state, &auth, Permission::ResourceView)?;
    let types = state.resource_type_service.list().await?;
    Ok(Json(ApiResponse::ok(types)))
}

/// POST /api/resource-types
pub async fn create_resource_type(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateResourceTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ResourceType>>), ApiError> {
    require(&state, &auth, Permission::ResourceManage)?;
    let created = state.resource_type_service.create(&auth, &req.name).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}
