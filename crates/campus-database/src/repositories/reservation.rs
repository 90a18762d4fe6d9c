//! Reservation persistence: the Postgres-backed [`ReservationStore`].

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Transaction};

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::id::{LessonId, ReservationId, ResourceId, ResourceTypeId};
use campus_entity::lesson::Lesson;
use campus_entity::reservation::{NewReservation, Reservation, ReservationDetail};
use campus_entity::resource::{Resource, ResourceDetail, ResourceStatus};
use campus_entity::resource_type::ResourceType;

use super::lesson::LESSON_COLUMNS;
use crate::error::{db_error, tx_error};
use crate::store::{ReservationStore, ReservationTx};

const DETAIL_SELECT: &str = "SELECT r.id, r.observation, \
            l.id AS lesson_id, l.date AS lesson_date, l.attendance AS lesson_attendance, \
            l.class_id AS lesson_class_id, l.room_id AS lesson_room_id, \
            l.discipline_id AS lesson_discipline_id, \
            s.id AS resource_id, s.description AS resource_description, \
            s.status AS resource_status, \
            t.id AS resource_type_id, t.name AS resource_type_name \
     FROM reservations r \
     JOIN lessons l ON l.id = r.lesson_id \
     JOIN resources s ON s.id = r.resource_id \
     JOIN resource_types t ON t.id = s.resource_type_id";

const RESERVATION_COLUMNS: &str = "id, observation, lesson_id, resource_id";

/// Flat row for a reservation joined with its lesson, resource and type.
#[derive(Debug, FromRow)]
struct ReservationDetailRow {
    id: ReservationId,
    observation: Option<String>,
    lesson_id: LessonId,
    lesson_date: NaiveDate,
    lesson_attendance: Option<String>,
    lesson_class_id: i32,
    lesson_room_id: i32,
    lesson_discipline_id: i32,
    resource_id: ResourceId,
    resource_description: String,
    resource_status: ResourceStatus,
    resource_type_id: ResourceTypeId,
    resource_type_name: String,
}

impl From<ReservationDetailRow> for ReservationDetail {
    fn from(row: ReservationDetailRow) -> Self {
        Self {
            id: row.id,
            observation: row.observation,
            lesson: Lesson {
                id: row.lesson_id,
                date: row.lesson_date,
                attendance: row.lesson_attendance,
                class_id: row.lesson_class_id,
                room_id: row.lesson_room_id,
                discipline_id: row.lesson_discipline_id,
            },
            resource: ResourceDetail {
                id: row.resource_id,
                description: row.resource_description,
                status: row.resource_status,
                resource_type: ResourceType {
                    id: row.resource_type_id,
                    name: row.resource_type_name,
                },
            },
        }
    }
}

async fn fetch_detail(
    conn: &mut PgConnection,
    id: ReservationId,
) -> AppResult<Option<ReservationDetail>> {
    sqlx::query_as::<_, ReservationDetailRow>(&format!("{DETAIL_SELECT} WHERE r.id = $1"))
        .bind(id)
        .fetch_optional(conn)
        .await
        .map(|row| row.map(ReservationDetail::from))
        .map_err(db_error("Failed to load reservation"))
}

/// Postgres implementation of [`ReservationStore`].
#[derive(Debug, Clone)]
pub struct PgReservationStore {
    pool: PgPool,
}

impl PgReservationStore {
    /// Create a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    type Tx = PgReservationTx;

    async fn begin(&self) -> AppResult<PgReservationTx> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(tx_error("Failed to begin transaction"))?;
        Ok(PgReservationTx { tx })
    }

    async fn find_reservation(&self, id: ReservationId) -> AppResult<Option<ReservationDetail>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(db_error("Failed to acquire connection"))?;
        fetch_detail(&mut *conn, id).await
    }

    async fn list_reservations(&self) -> AppResult<Vec<ReservationDetail>> {
        sqlx::query_as::<_, ReservationDetailRow>(&format!("{DETAIL_SELECT} ORDER BY r.id"))
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(ReservationDetail::from).collect())
            .map_err(db_error("Failed to list reservations"))
    }
}

/// One open reservation transaction.
///
/// Row locks taken with `FOR UPDATE` are held until commit or rollback.
#[derive(Debug)]
pub struct PgReservationTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ReservationTx for PgReservationTx {
    async fn lock_resource(&mut self, id: ResourceId) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>(
            "SELECT id, description, status, resource_type_id FROM resources \
             WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to lock resource"))
    }

    async fn set_resource_status(
        &mut self,
        id: ResourceId,
        status: ResourceStatus,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE resources SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&mut *self.tx)
            .await
            .map_err(db_error("Failed to update resource status"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Resource {id} not found")));
        }
        Ok(())
    }

    async fn find_lesson(&mut self, id: LessonId) -> AppResult<Option<Lesson>> {
        sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to find lesson by id"))
    }

    async fn insert_reservation(&mut self, data: &NewReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(&format!(
            "INSERT INTO reservations (observation, lesson_id, resource_id) \
             VALUES ($1, $2, $3) RETURNING {RESERVATION_COLUMNS}"
        ))
        .bind(&data.observation)
        .bind(data.lesson_id)
        .bind(data.resource_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| match db_error("Failed to create reservation")(e) {
            err if err.kind == ErrorKind::Conflict => {
                AppError::conflict("Resource is not available")
            }
            err => err,
        })
    }

    async fn lock_reservation(&mut self, id: ReservationId) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to lock reservation"))
    }

    async fn delete_reservation(&mut self, id: ReservationId) -> AppResult<bool> {
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map(|r| r.rows_affected() > 0)
            .map_err(db_error("Failed to delete reservation"))
    }

    async fn load_detail(&mut self, id: ReservationId) -> AppResult<Option<ReservationDetail>> {
        fetch_detail(&mut *self.tx, id).await
    }

    async fn commit(self) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(tx_error("Failed to commit transaction"))
    }

    async fn rollback(self) -> AppResult<()> {
        self.tx
            .rollback()
            .await
            .map_err(tx_error("Failed to roll back transaction"))
    }
}
