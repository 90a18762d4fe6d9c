//! Lesson entities.

pub mod model;

pub use model::Lesson;
