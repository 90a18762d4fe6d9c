//! # campus-database
//!
//! PostgreSQL connection management, migrations, and concrete repository
//! implementations. The reservation workflow talks to the database through
//! the [`store::ReservationStore`] seam so that it can run inside a single
//! transaction.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{ReservationStore, ReservationTx};
