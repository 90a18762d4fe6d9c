//! Database migration runner.

use sqlx::PgPool;
use tracing::{info, warn};

use campus_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop every object in the `public` schema and re-run all migrations.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    warn!("Dropping public schema");

    for statement in ["DROP SCHEMA public CASCADE", "CREATE SCHEMA public"] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to reset schema: {e}"),
                e,
            )
        })?;
    }

    run_migrations(pool).await
}
