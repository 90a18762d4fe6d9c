//! Lesson lookup.

use std::sync::Arc;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::id::LessonId;
use campus_database::repositories::LessonRepository;
use campus_entity::lesson::Lesson;

#[derive(Debug, Clone)]
pub struct LessonService {
    lesson_repo: Arc<LessonRepository>,
}

impl LessonService {
    pub fn new(lesson_repo: Arc<LessonRepository>) -> Self {
        Self { lesson_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Lesson>> {
        self.lesson_repo.find_all().await
    }

    pub async fn get(&self, id: LessonId) -> AppResult<Lesson> {
        self.lesson_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Lesson {id} not found")))
    }
}
