//! In-memory [`ReservationStore`] for exercising the workflow without Postgres.
//!
//! `begin` takes an exclusive lock on the whole state and works on a copy;
//! `commit` writes the copy back. Concurrent transactions therefore
//! serialize the same way two `FOR UPDATE` lockers of one row do.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::{Mutex, OwnedMutexGuard};

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::id::{LessonId, ReservationId, ResourceId, ResourceTypeId};
use campus_database::store::{ReservationStore, ReservationTx};
use campus_entity::lesson::Lesson;
use campus_entity::reservation::{NewReservation, Reservation, ReservationDetail};
use campus_entity::resource::{Resource, ResourceDetail, ResourceStatus};
use campus_entity::resource_type::ResourceType;

#[derive(Debug, Clone, Default)]
pub struct State {
    pub resource_types: BTreeMap<ResourceTypeId, ResourceType>,
    pub resources: BTreeMap<ResourceId, Resource>,
    pub lessons: BTreeMap<LessonId, Lesson>,
    pub reservations: BTreeMap<ReservationId, Reservation>,
    next_reservation_id: i32,
}

impl State {
    fn detail(&self, id: ReservationId) -> Option<ReservationDetail> {
        let reservation = self.reservations.get(&id)?;
        let lesson = self.lessons.get(&reservation.lesson_id)?;
        let resource = self.resources.get(&reservation.resource_id)?;
        let resource_type = self.resource_types.get(&resource.resource_type_id)?;
        Some(ReservationDetail::new(
            reservation.clone(),
            lesson.clone(),
            ResourceDetail::new(resource.clone(), resource_type.clone()),
        ))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
    fail_status_write: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_resource(&self, id: i32, status: ResourceStatus) {
        let mut state = self.state.lock().await;
        let type_id = ResourceTypeId::new(1);
        state.resource_types.entry(type_id).or_insert(ResourceType {
            id: type_id,
            name: "Projector".to_string(),
        });
        state.resources.insert(
            ResourceId::new(id),
            Resource {
                id: ResourceId::new(id),
                description: format!("Resource {id}"),
                status,
                resource_type_id: type_id,
            },
        );
    }

    pub async fn add_lesson(&self, id: i32) {
        let mut state = self.state.lock().await;
        state.lessons.insert(
            LessonId::new(id),
            Lesson {
                id: LessonId::new(id),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"),
                attendance: None,
                class_id: 1,
                room_id: 1,
                discipline_id: 1,
            },
        );
    }

    /// Insert a reservation row directly, with an explicit id.
    pub async fn seed_reservation(&self, id: i32, lesson_id: i32, resource_id: i32) {
        let mut state = self.state.lock().await;
        state.reservations.insert(
            ReservationId::new(id),
            Reservation {
                id: ReservationId::new(id),
                observation: None,
                lesson_id: LessonId::new(lesson_id),
                resource_id: ResourceId::new(resource_id),
            },
        );
        state.next_reservation_id = state.next_reservation_id.max(id);
    }

    pub async fn remove_resource(&self, id: i32) {
        self.state.lock().await.resources.remove(&ResourceId::new(id));
    }

    /// Make every subsequent resource status write fail.
    pub fn fail_status_writes(&self) {
        self.fail_status_write.store(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> State {
        self.state.lock().await.clone()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    type Tx = MemoryTx;

    async fn begin(&self) -> AppResult<MemoryTx> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let work = guard.clone();
        Ok(MemoryTx {
            guard,
            work,
            fail_status_write: self.fail_status_write.load(Ordering::SeqCst),
        })
    }

    async fn find_reservation(&self, id: ReservationId) -> AppResult<Option<ReservationDetail>> {
        Ok(self.state.lock().await.detail(id))
    }

    async fn list_reservations(&self) -> AppResult<Vec<ReservationDetail>> {
        let state = self.state.lock().await;
        Ok(state
            .reservations
            .keys()
            .filter_map(|id| state.detail(*id))
            .collect())
    }
}

pub struct MemoryTx {
    guard: OwnedMutexGuard<State>,
    work: State,
    fail_status_write: bool,
}

#[async_trait]
impl ReservationTx for MemoryTx {
    async fn lock_resource(&mut self, id: ResourceId) -> AppResult<Option<Resource>> {
        Ok(self.work.resources.get(&id).cloned())
    }

    async fn set_resource_status(
        &mut self,
        id: ResourceId,
        status: ResourceStatus,
    ) -> AppResult<()> {
        if self.fail_status_write {
            return Err(AppError::database("Injected status write failure"));
        }
        let resource = self
            .work
            .resources
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))?;
        resource.status = status;
        Ok(())
    }

    async fn find_lesson(&mut self, id: LessonId) -> AppResult<Option<Lesson>> {
        Ok(self.work.lessons.get(&id).cloned())
    }

    async fn insert_reservation(&mut self, data: &NewReservation) -> AppResult<Reservation> {
        if self
            .work
            .reservations
            .values()
            .any(|r| r.resource_id == data.resource_id)
        {
            return Err(AppError::conflict("Resource is not available"));
        }
        self.work.next_reservation_id += 1;
        let reservation = Reservation {
            id: ReservationId::new(self.work.next_reservation_id),
            observation: data.observation.clone(),
            lesson_id: data.lesson_id,
            resource_id: data.resource_id,
        };
        self.work
            .reservations
            .insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn lock_reservation(&mut self, id: ReservationId) -> AppResult<Option<Reservation>> {
        Ok(self.work.reservations.get(&id).cloned())
    }

    async fn delete_reservation(&mut self, id: ReservationId) -> AppResult<bool> {
        Ok(self.work.reservations.remove(&id).is_some())
    }

    async fn load_detail(&mut self, id: ReservationId) -> AppResult<Option<ReservationDetail>> {
        Ok(self.work.detail(id))
    }

    async fn commit(self) -> AppResult<()> {
        let MemoryTx {
            mut guard, work, ..
        } = self;
        *guard = work;
        Ok(())
    }

    async fn rollback(self) -> AppResult<()> {
        Ok(())
    }
}
