//! # campus-entity
//!
//! Domain entity models for the campus reservation backend. Every struct in
//! this crate represents a database row or a composed read model. Row types
//! derive `sqlx::FromRow`; enums map onto PostgreSQL types.

pub mod lesson;
pub mod reservation;
pub mod resource;
pub mod resource_type;
pub mod user;
