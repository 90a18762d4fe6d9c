//! The reservation workflow.

pub mod service;

pub use service::{MakeReservation, ReservationService};

#[cfg(test)]
mod memory;
