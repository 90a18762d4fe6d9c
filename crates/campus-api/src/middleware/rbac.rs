//! Permission guards called at the top of each handler.

use campus_auth::rbac::Permission;
use campus_core::error::AppError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Checks that the authenticated user's role grants `permission`.
pub fn require(state: &AppState, auth: &AuthUser, permission: Permission) -> Result<(), AppError> {
    state.rbac.require_permission(auth.role, permission)
}
