//! Resource type entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campus_core::types::id::ResourceTypeId;

/// A category of resource (projector, laptop, ...). Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ResourceType {
    pub id: ResourceTypeId,
    pub name: String,
}
