//! Lesson entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campus_core::types::id::LessonId;

/// A scheduled class session. Reservations attach resources to lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: LessonId,
    /// Day the lesson takes place.
    pub date: NaiveDate,
    /// Free-form attendance record.
    pub attendance: Option<String>,
    /// Owning class.
    pub class_id: i32,
    /// Room the lesson is held in.
    pub room_id: i32,
    /// Discipline taught.
    pub discipline_id: i32,
}
