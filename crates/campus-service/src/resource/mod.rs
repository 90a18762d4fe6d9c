//! Resource and resource type administration.

pub mod resource_type;
pub mod service;

pub use resource_type::ResourceTypeService;
pub use service::ResourceService;
