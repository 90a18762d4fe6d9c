//! Resource type entities.

pub mod model;

pub use model::ResourceType;
