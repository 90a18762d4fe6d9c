//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use campus_entity::user::Role;

/// An operation-level permission checked at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Reserve a resource for a lesson.
    ReservationMake,
    /// Cancel a reservation.
    ReservationCancel,
    /// List and read reservations.
    ReservationView,
    /// List and read resources and resource types.
    ResourceView,
    /// Create, update and delete resources and resource types.
    ResourceManage,
    /// List and read lessons.
    LessonView,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 6] = [
        Permission::ReservationMake,
        Permission::ReservationCancel,
        Permission::ReservationView,
        Permission::ResourceView,
        Permission::ResourceManage,
        Permission::LessonView,
    ];
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReservationMake => "reservation_make",
            Self::ReservationCancel => "reservation_cancel",
            Self::ReservationView => "reservation_view",
            Self::ResourceView => "resource_view",
            Self::ResourceManage => "resource_manage",
            Self::LessonView => "lesson_view",
        };
        f.write_str(name)
    }
}

/// Defines the mapping from each role to its set of allowed permissions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<Role, HashSet<Permission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        // Coordinator: read-only
        let coordinator: HashSet<Permission> = [
            Permission::ReservationView,
            Permission::ResourceView,
            Permission::LessonView,
        ]
        .into_iter()
        .collect();
        policies.insert(Role::Coordinator, coordinator);

        // Professor: coordinator + make/cancel reservations
        let professor: HashSet<Permission> = [
            Permission::ReservationMake,
            Permission::ReservationCancel,
            Permission::ReservationView,
            Permission::ResourceView,
            Permission::LessonView,
        ]
        .into_iter()
        .collect();
        policies.insert(Role::Professor, professor);

        policies.insert(Role::Admin, Permission::ALL.into_iter().collect());

        Self { policies }
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: Role) -> HashSet<Permission> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_everything() {
        let policies = RbacPolicies::new();
        for permission in Permission::ALL {
            assert!(policies.has_permission(Role::Admin, permission));
        }
    }

    #[test]
    fn test_professor_cannot_manage_resources() {
        let policies = RbacPolicies::new();
        assert!(policies.has_permission(Role::Professor, Permission::ReservationMake));
        assert!(policies.has_permission(Role::Professor, Permission::ReservationCancel));
        assert!(!policies.has_permission(Role::Professor, Permission::ResourceManage));
    }

    #[test]
    fn test_coordinator_is_read_only() {
        let perms = RbacPolicies::new().permissions_for_role(Role::Coordinator);
        assert_eq!(perms.len(), 3);
        assert!(!perms.contains(&Permission::ReservationMake));
        assert!(!perms.contains(&Permission::ReservationCancel));
        assert!(perms.contains(&Permission::ReservationView));
    }
}
