//! Lesson repository implementation.

use sqlx::PgPool;

use campus_core::result::AppResult;
use campus_core::types::id::LessonId;
use campus_entity::lesson::Lesson;

use crate::error::db_error;

pub(crate) const LESSON_COLUMNS: &str =
    "id, date, attendance, class_id, room_id, discipline_id";

/// Read-only access to scheduled lessons.
#[derive(Debug, Clone)]
pub struct LessonRepository {
    pool: PgPool,
}

impl LessonRepository {
    /// Create a new lesson repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a lesson by primary key.
    pub async fn find_by_id(&self, id: LessonId) -> AppResult<Option<Lesson>> {
        sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find lesson by id"))
    }

    /// List all lessons, most recent first.
    pub async fn find_all(&self) -> AppResult<Vec<Lesson>> {
        sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons ORDER BY date DESC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list lessons"))
    }
}
