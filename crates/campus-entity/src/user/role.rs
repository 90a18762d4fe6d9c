//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// A role is derived from the name of the user's profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system administrator.
    Admin,
    /// Teaches lessons and reserves resources for them.
    Professor,
    /// Oversees courses; read-only access to reservations.
    Coordinator,
}

impl Role {
    /// Map a profile name onto a role, case-insensitively.
    ///
    /// Both the Portuguese `coordenador` and English `coordinator` spellings
    /// resolve to [`Role::Coordinator`].
    pub fn from_profile_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "admin" | "administrator" => Some(Self::Admin),
            "professor" => Some(Self::Professor),
            "coordenador" | "coordinator" => Some(Self::Coordinator),
            _ => None,
        }
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Professor => "professor",
            Self::Coordinator => "coordinator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = campus_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_profile_name(s).ok_or_else(|| {
            campus_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, professor, coordinator"
            ))
        })
    }
}
