//! Making and cancelling reservations against resource availability.
//!
//! Both operations run as a single transaction obtained from a
//! [`ReservationStore`]. The resource row is locked before its status is
//! inspected, so two concurrent requests for the same resource serialize and
//! the loser observes `taken`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::id::{LessonId, ReservationId, ResourceId};
use campus_database::store::{ReservationStore, ReservationTx};
use campus_entity::reservation::model::OBSERVATION_MAX_LEN;
use campus_entity::reservation::{NewReservation, Reservation, ReservationDetail};
use campus_entity::resource::ResourceStatus;

use crate::context::RequestContext;

/// Request to reserve a resource for a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeReservation {
    pub lesson_id: LessonId,
    pub resource_id: ResourceId,
    pub observation: Option<String>,
}

/// Orchestrates the reservation workflow.
pub struct ReservationService<S: ReservationStore> {
    store: Arc<S>,
}

impl<S: ReservationStore> Clone for ReservationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ReservationStore> std::fmt::Debug for ReservationService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationService").finish_non_exhaustive()
    }
}

impl<S: ReservationStore> ReservationService<S> {
    /// Creates a new reservation service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reserve an available resource for a lesson.
    ///
    /// Fails with `NotFound` if the resource or lesson does not exist and
    /// with `Conflict` if the resource is not `available`. On success the
    /// resource is `taken` and the returned reservation embeds both.
    pub async fn make_reservation(
        &self,
        ctx: &RequestContext,
        req: MakeReservation,
    ) -> AppResult<ReservationDetail> {
        let new = NewReservation {
            lesson_id: req.lesson_id,
            resource_id: req.resource_id,
            observation: normalize_observation(req.observation)?,
        };

        let mut tx = self.store.begin().await?;
        match make_in_tx(&mut tx, &new).await {
            Ok(detail) => {
                tx.commit().await?;
                info!(
                    user_id = %ctx.user_id,
                    reservation_id = %detail.id,
                    resource_id = %new.resource_id,
                    lesson_id = %new.lesson_id,
                    "Reservation made"
                );
                Ok(detail)
            }
            Err(e) => {
                abort(tx).await;
                Err(e)
            }
        }
    }

    /// Cancel a reservation and make its resource available again.
    ///
    /// If the reservation's resource cannot be resolved nothing is deleted.
    pub async fn cancel_reservation(
        &self,
        ctx: &RequestContext,
        id: ReservationId,
    ) -> AppResult<String> {
        let mut tx = self.store.begin().await?;
        match cancel_in_tx(&mut tx, id).await {
            Ok(reservation) => {
                tx.commit().await?;
                info!(
                    user_id = %ctx.user_id,
                    reservation_id = %id,
                    resource_id = %reservation.resource_id,
                    "Reservation cancelled"
                );
                Ok(format!("Reservation {id} cancelled"))
            }
            Err(e) => {
                abort(tx).await;
                Err(e)
            }
        }
    }

    /// Look up a single reservation.
    pub async fn get_reservation_by_id(&self, id: ReservationId) -> AppResult<ReservationDetail> {
        self.store
            .find_reservation(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }

    /// List every reservation.
    pub async fn get_all_reservations(&self) -> AppResult<Vec<ReservationDetail>> {
        self.store.list_reservations().await
    }
}

async fn make_in_tx<T: ReservationTx>(
    tx: &mut T,
    new: &NewReservation,
) -> AppResult<ReservationDetail> {
    let resource = tx
        .lock_resource(new.resource_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Resource {} not found", new.resource_id)))?;

    if !resource.is_available() {
        return Err(AppError::conflict("Resource is not available"));
    }

    tx.find_lesson(new.lesson_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Lesson {} not found", new.lesson_id)))?;

    let reservation = tx.insert_reservation(new).await?;
    tx.set_resource_status(resource.id, ResourceStatus::Taken)
        .await?;

    tx.load_detail(reservation.id).await?.ok_or_else(|| {
        AppError::internal(format!(
            "Reservation {} disappeared inside its own transaction",
            reservation.id
        ))
    })
}

async fn cancel_in_tx<T: ReservationTx>(tx: &mut T, id: ReservationId) -> AppResult<Reservation> {
    let reservation = tx
        .lock_reservation(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;

    let resource = tx
        .lock_resource(reservation.resource_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Resource {} not found", reservation.resource_id))
        })?;

    if !tx.delete_reservation(id).await? {
        return Err(AppError::not_found(format!("Reservation {id} not found")));
    }
    tx.set_resource_status(resource.id, ResourceStatus::Available)
        .await?;

    Ok(reservation)
}

async fn abort<T: ReservationTx>(tx: T) {
    if let Err(e) = tx.rollback().await {
        warn!(error = %e, "Failed to roll back reservation transaction");
    }
}

/// Blank observations are stored as absent.
fn normalize_observation(observation: Option<String>) -> AppResult<Option<String>> {
    let Some(text) = observation else {
        return Ok(None);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > OBSERVATION_MAX_LEN {
        return Err(AppError::validation(format!(
            "Observation must be at most {OBSERVATION_MAX_LEN} characters"
        )));
    }
    Ok(Some(trimmed.to_string()))
}
