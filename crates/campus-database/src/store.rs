//! Transactional persistence seam for the reservation workflow.
//!
//! A [`ReservationStore`] hands out [`ReservationTx`] handles. Every
//! statement issued through a handle runs in one database transaction that
//! is only made durable by [`ReservationTx::commit`]. Dropping a handle
//! without committing discards its writes.

use async_trait::async_trait;

use campus_core::result::AppResult;
use campus_core::types::id::{LessonId, ReservationId, ResourceId};
use campus_entity::lesson::Lesson;
use campus_entity::reservation::{NewReservation, Reservation, ReservationDetail};
use campus_entity::resource::{Resource, ResourceStatus};

/// Source of reservation transactions plus non-locking reads.
#[async_trait]
pub trait ReservationStore: Send + Sync + 'static {
    /// Transaction handle type.
    type Tx: ReservationTx;

    /// Open a new transaction.
    async fn begin(&self) -> AppResult<Self::Tx>;

    /// Read a reservation with its lesson and resource resolved.
    async fn find_reservation(&self, id: ReservationId) -> AppResult<Option<ReservationDetail>>;

    /// Read every reservation, ordered by id.
    async fn list_reservations(&self) -> AppResult<Vec<ReservationDetail>>;
}

/// Statements available inside a reservation transaction.
#[async_trait]
pub trait ReservationTx: Send {
    /// Read a resource and hold its row lock until the transaction ends.
    async fn lock_resource(&mut self, id: ResourceId) -> AppResult<Option<Resource>>;

    /// Persist a resource status change.
    async fn set_resource_status(&mut self, id: ResourceId, status: ResourceStatus)
    -> AppResult<()>;

    /// Resolve a lesson.
    async fn find_lesson(&mut self, id: LessonId) -> AppResult<Option<Lesson>>;

    /// Insert a reservation row.
    async fn insert_reservation(&mut self, data: &NewReservation) -> AppResult<Reservation>;

    /// Read a reservation and hold its row lock until the transaction ends.
    async fn lock_reservation(&mut self, id: ReservationId) -> AppResult<Option<Reservation>>;

    /// Delete a reservation row. Returns `false` if nothing was deleted.
    async fn delete_reservation(&mut self, id: ReservationId) -> AppResult<bool>;

    /// Read a reservation with its references resolved, as seen by this transaction.
    async fn load_detail(&mut self, id: ReservationId) -> AppResult<Option<ReservationDetail>>;

    /// Make every write durable.
    async fn commit(self) -> AppResult<()>;

    /// Discard every write.
    async fn rollback(self) -> AppResult<()>;
}
