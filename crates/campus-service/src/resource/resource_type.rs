//! Resource type administration.

use std::sync::Arc;

use tracing::info;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_database::repositories::ResourceTypeRepository;
use campus_entity::resource_type::ResourceType;

use crate::context::RequestContext;

/// Lists and creates resource types.
#[derive(Debug, Clone)]
pub struct ResourceTypeService {
    type_repo: Arc<ResourceTypeRepository>,
}

impl ResourceTypeService {
    pub fn new(type_repo: Arc<ResourceTypeRepository>) -> Self {
        Self { type_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<ResourceType>> {
        self.type_repo.find_all().await
    }

    /// Create a resource type. Duplicate names are a `Conflict`.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> AppResult<ResourceType> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Resource type name cannot be empty"));
        }
        let created = self.type_repo.create(name).await?;
        info!(
            user_id = %ctx.user_id,
            resource_type_id = %created.id,
            name = %created.name,
            "Resource type created"
        );
        Ok(created)
    }
}
