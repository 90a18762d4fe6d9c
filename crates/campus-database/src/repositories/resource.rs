//! Resource repository implementation.

use sqlx::{FromRow, PgPool};
use tracing::debug;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::id::{ResourceId, ResourceTypeId};
use campus_entity::resource::{CreateResource, Resource, ResourceDetail, ResourceStatus};
use campus_entity::resource_type::ResourceType;

use crate::error::{db_error, tx_error};

pub(crate) const RESOURCE_DETAIL_SELECT: &str = "SELECT s.id, s.description, s.status, \
            t.id AS resource_type_id, t.name AS resource_type_name \
     FROM resources s \
     JOIN resource_types t ON t.id = s.resource_type_id";

/// Flat row for a resource joined with its type.
#[derive(Debug, FromRow)]
pub(crate) struct ResourceDetailRow {
    id: ResourceId,
    description: String,
    status: ResourceStatus,
    resource_type_id: ResourceTypeId,
    resource_type_name: String,
}

impl From<ResourceDetailRow> for ResourceDetail {
    fn from(row: ResourceDetailRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            status: row.status,
            resource_type: ResourceType {
                id: row.resource_type_id,
                name: row.resource_type_name,
            },
        }
    }
}

/// Repository for resource administration.
///
/// Status flips between `available` and `taken` do not go through here;
/// those belong to [`crate::repositories::PgReservationStore`].
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a resource row by primary key.
    pub async fn find_by_id(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>(
            "SELECT id, description, status, resource_type_id FROM resources WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find resource by id"))
    }

    /// Find a resource with its type resolved.
    pub async fn find_detail(&self, id: ResourceId) -> AppResult<Option<ResourceDetail>> {
        sqlx::query_as::<_, ResourceDetailRow>(&format!("{RESOURCE_DETAIL_SELECT} WHERE s.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(ResourceDetail::from))
            .map_err(db_error("Failed to find resource by id"))
    }

    /// List all resources with their types, ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<ResourceDetail>> {
        sqlx::query_as::<_, ResourceDetailRow>(&format!("{RESOURCE_DETAIL_SELECT} ORDER BY s.id"))
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(ResourceDetail::from).collect())
            .map_err(db_error("Failed to list resources"))
    }

    /// Insert a new resource.
    pub async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (description, status, resource_type_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, description, status, resource_type_id",
        )
        .bind(&data.description)
        .bind(data.status)
        .bind(data.resource_type_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create resource"))
    }

    /// Lock a resource row, let `change` compute the new row, and persist it.
    ///
    /// Returns `Ok(None)` if the resource does not exist. An error returned
    /// by `change` aborts the transaction without writing.
    pub async fn update_locked<F>(&self, id: ResourceId, change: F) -> AppResult<Option<Resource>>
    where
        F: FnOnce(&Resource) -> AppResult<Resource> + Send,
    {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(tx_error("Failed to begin transaction"))?;

        let current = sqlx::query_as::<_, Resource>(
            "SELECT id, description, status, resource_type_id FROM resources \
             WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to lock resource"))?;

        let Some(current) = current else {
            return Ok(None);
        };

        let next = change(&current)?;

        let updated = sqlx::query_as::<_, Resource>(
            "UPDATE resources SET description = $2, status = $3, resource_type_id = $4 \
             WHERE id = $1 \
             RETURNING id, description, status, resource_type_id",
        )
        .bind(id)
        .bind(&next.description)
        .bind(next.status)
        .bind(next.resource_type_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to update resource"))?;

        tx.commit()
            .await
            .map_err(tx_error("Failed to commit resource update"))?;

        debug!(resource_id = %id, status = %updated.status, "Resource updated");
        Ok(Some(updated))
    }

    /// Delete a resource that no reservation references.
    ///
    /// Returns `Ok(false)` if the resource does not exist.
    pub async fn delete(&self, id: ResourceId) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(tx_error("Failed to begin transaction"))?;

        let locked: Option<ResourceId> =
            sqlx::query_scalar("SELECT id FROM resources WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to lock resource"))?;

        if locked.is_none() {
            return Ok(false);
        }

        let referenced: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM reservations WHERE resource_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to check resource reservations"))?;

        if referenced {
            return Err(AppError::conflict(format!(
                "Resource {id} is referenced by a reservation"
            )));
        }

        sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete resource"))?;

        tx.commit()
            .await
            .map_err(tx_error("Failed to commit resource delete"))?;

        Ok(true)
    }
}
