//! # campus-api
//!
//! HTTP API layer for the campus reservation backend built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, timeouts,
//! CORS), extractors (bearer authentication, validated bodies, typed ids),
//! DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
