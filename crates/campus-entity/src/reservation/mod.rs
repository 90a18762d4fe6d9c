//! Reservation entities.

pub mod model;

pub use model::{NewReservation, Reservation, ReservationDetail};
