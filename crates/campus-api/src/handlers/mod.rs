//! HTTP request handlers, one module per resource.

pub mod health;
pub mod lesson;
pub mod reservation;
pub mod resource;
pub mod resource_type;
