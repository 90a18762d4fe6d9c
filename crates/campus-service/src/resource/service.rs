//! Resource administration: create, update, delete, and lookup.
//!
//! Administrators may only move a resource between `available` and
//! `maintenance`. `taken` belongs to the reservation workflow.

use std::sync::Arc;

use tracing::info;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::id::{ResourceId, ResourceTypeId};
use campus_database::repositories::{ResourceRepository, ResourceTypeRepository};
use campus_entity::resource::{
    CreateResource, Resource, ResourceDetail, ResourceStatus, UpdateResource,
};

use crate::context::RequestContext;

/// Handles resource administration.
#[derive(Debug, Clone)]
pub struct ResourceService {
    resource_repo: Arc<ResourceRepository>,
    type_repo: Arc<ResourceTypeRepository>,
}

impl ResourceService {
    /// Creates a new resource service.
    pub fn new(
        resource_repo: Arc<ResourceRepository>,
        type_repo: Arc<ResourceTypeRepository>,
    ) -> Self {
        Self {
            resource_repo,
            type_repo,
        }
    }

    /// List every resource with its type.
    pub async fn list(&self) -> AppResult<Vec<ResourceDetail>> {
        self.resource_repo.find_all().await
    }

    /// Look up one resource.
    pub async fn get(&self, id: ResourceId) -> AppResult<ResourceDetail> {
        self.resource_repo
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))
    }

    /// Create a resource in an administrative status.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateResource,
    ) -> AppResult<ResourceDetail> {
        data.description = validate_description(&data.description)?;
        if !data.status.is_administrative() {
            return Err(AppError::validation(
                "A new resource must be 'available' or 'maintenance'",
            ));
        }
        self.ensure_type_exists(data.resource_type_id).await?;

        let resource = self.resource_repo.create(&data).await?;
        info!(
            user_id = %ctx.user_id,
            resource_id = %resource.id,
            status = %resource.status,
            "Resource created"
        );
        self.get(resource.id).await
    }

    /// Update description, type or administrative status under a row lock.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ResourceId,
        update: UpdateResource,
    ) -> AppResult<ResourceDetail> {
        if let Some(type_id) = update.resource_type_id {
            self.ensure_type_exists(type_id).await?;
        }

        let updated = self
            .resource_repo
            .update_locked(id, |current| plan_update(current, &update))
            .await?
            .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))?;

        info!(
            user_id = %ctx.user_id,
            resource_id = %id,
            status = %updated.status,
            "Resource updated"
        );
        self.get(id).await
    }

    /// Delete a resource no reservation references.
    pub async fn delete(&self, ctx: &RequestContext, id: ResourceId) -> AppResult<()> {
        if !self.resource_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Resource {id} not found")));
        }
        info!(user_id = %ctx.user_id, resource_id = %id, "Resource deleted");
        Ok(())
    }

    async fn ensure_type_exists(&self, id: ResourceTypeId) -> AppResult<()> {
        self.type_repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Resource type {id} not found")))
    }
}

fn validate_description(description: &str) -> AppResult<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Description cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Compute the row an administrative update produces.
fn plan_update(current: &Resource, update: &UpdateResource) -> AppResult<Resource> {
    let mut update = update.clone();

    if let Some(description) = &update.description {
        update.description = Some(validate_description(description)?);
    }

    if let Some(status) = update.status {
        if status != current.status {
            if current.status == ResourceStatus::Taken {
                return Err(AppError::conflict(format!(
                    "Resource {} is reserved; cancel its reservation first",
                    current.id
                )));
            }
            if !status.is_administrative() {
                return Err(AppError::validation(
                    "Status 'taken' is only set by making a reservation",
                ));
            }
        }
    }

    Ok(update.apply(current))
}
