//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campus_core::types::id::UserId;
use campus_entity::user::{Role, UserIdentity};

/// Context for the current authenticated request.
///
/// Built at the HTTP boundary and passed into service methods so that
/// every state change is logged with the acting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The role resolved from the user's profile.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<UserIdentity> for RequestContext {
    fn from(identity: UserIdentity) -> Self {
        Self::new(identity.user_id, identity.role)
    }
}
