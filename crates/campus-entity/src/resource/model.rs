//! Resource entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campus_core::types::id::{ResourceId, ResourceTypeId};

use super::status::ResourceStatus;
use crate::resource_type::ResourceType;

/// A reservable physical asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    /// Free-text description.
    pub description: String,
    /// Current availability.
    pub status: ResourceStatus,
    /// The resource's type.
    pub resource_type_id: ResourceTypeId,
}

impl Resource {
    /// Check if the resource can be reserved right now.
    pub fn is_available(&self) -> bool {
        self.status.is_reservable()
    }
}

/// A resource with its type resolved, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDetail {
    pub id: ResourceId,
    pub description: String,
    pub status: ResourceStatus,
    pub resource_type: ResourceType,
}

impl ResourceDetail {
    /// Combine a resource row with its resolved type.
    pub fn new(resource: Resource, resource_type: ResourceType) -> Self {
        Self {
            id: resource.id,
            description: resource.description,
            status: resource.status,
            resource_type,
        }
    }
}

/// Data required to create a new resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    pub description: String,
    pub status: ResourceStatus,
    pub resource_type_id: ResourceTypeId,
}

/// Partial update of a resource. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResource {
    pub description: Option<String>,
    pub status: Option<ResourceStatus>,
    pub resource_type_id: Option<ResourceTypeId>,
}

impl UpdateResource {
    /// Apply the changes onto an existing row, producing the new row.
    pub fn apply(&self, current: &Resource) -> Resource {
        Resource {
            id: current.id,
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            status: self.status.unwrap_or(current.status),
            resource_type_id: self.resource_type_id.unwrap_or(current.resource_type_id),
        }
    }
}
