//! # campus-service
//!
//! Business logic service layer. Each service orchestrates repositories to
//! implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod context;
pub mod lesson;
pub mod reservation;
pub mod resource;

pub use context::RequestContext;
pub use lesson::LessonService;
pub use reservation::{MakeReservation, ReservationService};
pub use resource::{ResourceService, ResourceTypeService};
