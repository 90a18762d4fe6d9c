//! Resource availability status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability state of a resource.
///
/// Only the reservation workflow moves a resource between `Available` and
/// `Taken`. `Maintenance` is set administratively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// Free to be reserved.
    Available,
    /// Out of service.
    Maintenance,
    /// Held by a reservation.
    Taken,
}

impl ResourceStatus {
    /// Check if a reservation can be made against this status.
    pub fn is_reservable(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Statuses an administrator may assign directly.
    pub fn is_administrative(&self) -> bool {
        matches!(self, Self::Available | Self::Maintenance)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Maintenance => "maintenance",
            Self::Taken => "taken",
        }
    }
}

impl Default for ResourceStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceStatus {
    type Err = campus_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "maintenance" => Ok(Self::Maintenance),
            "taken" => Ok(Self::Taken),
            _ => Err(campus_core::AppError::validation(format!(
                "Invalid resource status: '{s}'. Expected one of: available, maintenance, taken"
            ))),
        }
    }
}
