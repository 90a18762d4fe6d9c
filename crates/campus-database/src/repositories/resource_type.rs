//! Resource type repository implementation.

use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::id::ResourceTypeId;
use campus_entity::resource_type::ResourceType;

use crate::error::db_error;

/// Repository for resource type categories.
#[derive(Debug, Clone)]
pub struct ResourceTypeRepository {
    pool: PgPool,
}

impl ResourceTypeRepository {
    /// Create a new resource type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a resource type by primary key.
    pub async fn find_by_id(&self, id: ResourceTypeId) -> AppResult<Option<ResourceType>> {
        sqlx::query_as::<_, ResourceType>("SELECT id, name FROM resource_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find resource type by id"))
    }

    /// List all resource types ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<ResourceType>> {
        sqlx::query_as::<_, ResourceType>("SELECT id, name FROM resource_types ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list resource types"))
    }

    /// Create a new resource type. Names are unique.
    pub async fn create(&self, name: &str) -> AppResult<ResourceType> {
        sqlx::query_as::<_, ResourceType>(
            "INSERT INTO resource_types (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match db_error("Failed to create resource type")(e) {
            err if err.kind == ErrorKind::Conflict => {
                AppError::conflict(format!("Resource type '{name}' already exists"))
            }
            err => err,
        })
    }
}
