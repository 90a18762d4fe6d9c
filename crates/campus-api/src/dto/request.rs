//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use campus_core::types::id::{LessonId, ResourceId, ResourceTypeId};
use campus_entity::resource::{CreateResource, ResourceStatus, UpdateResource};
use campus_service::MakeReservation;

/// Body of `POST /api/reservations`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MakeReservationRequest {
    #[validate(range(min = 1, message = "lesson_id must be positive"))]
    pub lesson_id: i32,
    #[validate(range(min = 1, message = "resource_id must be positive"))]
    pub resource_id: i32,
    #[validate(length(max = 255, message = "observation must be at most 255 characters"))]
    pub observation: Option<String>,
}

impl From<MakeReservationRequest> for MakeReservation {
    fn from(req: MakeReservationRequest) -> Self {
        Self {
            lesson_id: LessonId::new(req.lesson_id),
            resource_id: ResourceId::new(req.resource_id),
            observation: req.observation,
        }
    }
}

/// Body of `POST /api/resources`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    #[validate(range(min = 1))]
    pub resource_type_id: i32,
    #[serde(default)]
    pub status: ResourceStatus,
}

impl From<CreateResourceRequest> for CreateResource {
    fn from(req: CreateResourceRequest) -> Self {
        Self {
            description: req.description,
            status: req.status,
            resource_type_id: ResourceTypeId::new(req.resource_type_id),
        }
    }
}

/// Body of `PUT /api/resources/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateResourceRequest {
    #[validate(length(min = 1, max = 255))]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub resource_type_id: Option<i32>,
    pub status: Option<ResourceStatus>,
}

impl From<UpdateResourceRequest> for UpdateResource {
    fn from(req: UpdateResourceRequest) -> Self {
        Self {
            description: req.description,
            status: req.status,
            resource_type_id: req.resource_type_id.map(ResourceTypeId::new),
        }
    }
}

/// Body of `POST /api/resource-types`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResourceTypeRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
