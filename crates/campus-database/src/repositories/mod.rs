//! Repository implementations for campus entities.

pub mod lesson;
pub mod reservation;
pub mod resource;
pub mod resource_type;
pub mod user;

pub use lesson::LessonRepository;
pub use reservation::{PgReservationStore, PgReservationTx};
pub use resource::ResourceRepository;
pub use resource_type::ResourceTypeRepository;
pub use user::UserRepository;
