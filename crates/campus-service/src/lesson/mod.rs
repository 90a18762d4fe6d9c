//! Read-only lesson lookup.

pub mod service;

pub use service::LessonService;
