//! Resource handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_auth::rbac::Permission;
use campus_core::types::id::ResourceId;
use campus_entity::resource::ResourceDetail;

use crate::dto::request::{CreateResourceRequest, UpdateResourceRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::middleware::rbac::require;
use crate::state::AppState;

/// GET /api/resources
pub async fn list_resources(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ResourceDetail>>>, ApiError> {
    require(&state, &auth, Permission::ResourceView)?;
    let resources = state.resource_service.list().await?;
    Ok(Json(ApiResponse::ok(resources)))
}

/// GET /api/resources/{id}
pub async fn get_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<ResourceId>,
) -> Result<Json<ApiResponse<ResourceDetail>>, ApiError> {
    require(&state, &auth, Permission::ResourceView)?;
    let resource = state.resource_service.get(id).await?;
    Ok(Json(ApiResponse::ok(resource)))
}

/// POST /api/resources
pub async fn create_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ResourceDetail>>), ApiError> {
    require(&state, &auth, Permission::ResourceManage)?;
    let resource = state.resource_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

/// PUT /api/resources/{id}
pub async fn update_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<ResourceId>,
    ValidatedJson(req): ValidatedJson<UpdateResourceRequest>,
) -> Result<Json<ApiResponse<ResourceDetail>>, ApiError> {
    require(&state, &auth, Permission::ResourceManage)?;
    let resource = state.resource_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(resource)))
}

/// DELETE /api/resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<ResourceId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require(&state, &auth, Permission::ResourceManage)?;
    state.resource_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Resource {id} deleted"),
    })))
}
