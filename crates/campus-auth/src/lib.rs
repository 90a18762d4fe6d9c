//! # campus-auth
//!
//! Authentication and authorization for the campus reservation backend.
//!
//! ## Modules
//!
//! - `jwt`: bearer token creation and validation
//! - `identity`: resolving a token subject to a user and role
//! - `rbac`: role-to-permission policies and enforcement

pub mod identity;
pub mod jwt;
pub mod rbac;

pub use identity::{DbIdentityResolver, IdentityResolver};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::{Permission, RbacEnforcer, RbacPolicies};
