//! Reservation entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campus_core::types::id::{LessonId, ReservationId, ResourceId};

use crate::lesson::Lesson;
use crate::resource::ResourceDetail;

/// Maximum length of a reservation observation.
pub const OBSERVATION_MAX_LEN: usize = 255;

/// A binding of one resource to one lesson.
///
/// While a reservation row exists its resource is `taken`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// Optional note left by the requester.
    pub observation: Option<String>,
    /// The lesson the resource is reserved for.
    pub lesson_id: LessonId,
    /// The reserved resource.
    pub resource_id: ResourceId,
}

/// Data required to insert a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub lesson_id: LessonId,
    pub resource_id: ResourceId,
    pub observation: Option<String>,
}

/// A reservation with its lesson and resource resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetail {
    pub id: ReservationId,
    pub observation: Option<String>,
    pub lesson: Lesson,
    pub resource: ResourceDetail,
}

impl ReservationDetail {
    /// Build the read model from a reservation row and its resolved references.
    pub fn new(reservation: Reservation, lesson: Lesson, resource: ResourceDetail) -> Self {
        Self {
            id: reservation.id,
            observation: reservation.observation,
            lesson,
            resource,
        }
    }
}
