//! User repository implementation.

use sqlx::PgPool;

use campus_core::result::AppResult;
use campus_core::types::id::UserId;
use campus_entity::user::User;

use crate::error::db_error;

/// Read access to users and their profiles.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key, joined with their profile name.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.email, u.name, u.birth_date, u.gender, u.profile_id, \
                    p.name AS profile_name \
             FROM users u \
             JOIN profiles p ON p.id = u.profile_id \
             WHERE u.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find user by id"))
    }
}
