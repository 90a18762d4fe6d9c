//! User entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campus_core::types::id::UserId;

use super::role::Role;

/// A registered user, joined with the name of their profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique email address.
    pub email: String,
    /// Full name.
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    /// Foreign key into `profiles`.
    pub profile_id: i32,
    /// `profiles.name` for `profile_id`.
    pub profile_name: String,
}

impl User {
    /// Resolve the profile name into a role, if it is one we know.
    pub fn role(&self) -> Option<Role> {
        Role::from_profile_name(&self.profile_name)
    }
}

/// The authenticated caller, resolved once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: UserId,
    pub role: Role,
}
