//! Reservable resource entities.

pub mod model;
pub mod status;

pub use model::{CreateResource, Resource, ResourceDetail, UpdateResource};
pub use status::ResourceStatus;
