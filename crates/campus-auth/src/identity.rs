//! Resolution of an authenticated subject into a user identity.

use async_trait::async_trait;
use tracing::debug;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::id::UserId;
use campus_database::repositories::UserRepository;
use campus_entity::user::UserIdentity;

/// Turns a token subject into the caller's identity.
///
/// Unknown users are `Unauthorized`; users whose profile does not map to a
/// known role are `Forbidden`.
#[async_trait]
pub trait IdentityResolver: Send + Sync + 'static {
    async fn resolve(&self, user_id: UserId) -> AppResult<UserIdentity>;
}

/// Resolves identities from the `users` and `profiles` tables.
#[derive(Debug, Clone)]
pub struct DbIdentityResolver {
    users: UserRepository,
}

impl DbIdentityResolver {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }
}

#[async_trait]
impl IdentityResolver for DbIdentityResolver {
    async fn resolve(&self, user_id: UserId) -> AppResult<UserIdentity> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        let role = user.role().ok_or_else(|| {
            AppError::forbidden(format!(
                "Profile '{}' has no access to this service",
                user.profile_name
            ))
        })?;

        debug!(user_id = %user_id, role = %role, "Resolved caller identity");
        Ok(UserIdentity { user_id, role })
    }
}
