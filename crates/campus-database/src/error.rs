//! Translation of sqlx errors into application errors.

use campus_core::error::{AppError, ErrorKind};

/// PostgreSQL `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL `serialization_failure`.
pub const SERIALIZATION_FAILURE: &str = "40001";
/// PostgreSQL `deadlock_detected`.
pub const DEADLOCK_DETECTED: &str = "40P01";

/// Classify a sqlx error by its SQLSTATE.
pub fn classify(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) | Some(FOREIGN_KEY_VIOLATION) => ErrorKind::Conflict,
            Some(SERIALIZATION_FAILURE) | Some(DEADLOCK_DETECTED) => ErrorKind::Transaction,
            _ => ErrorKind::Database,
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        _ => ErrorKind::Database,
    }
}

/// Build a mapper that wraps a sqlx error with context and the right kind.
pub fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let kind = classify(&e);
        AppError::with_source(kind, context, e)
    }
}

/// Build a mapper for transaction control statements (`BEGIN`, `COMMIT`, `ROLLBACK`).
pub fn tx_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| match classify(&e) {
        ErrorKind::ServiceUnavailable => {
            AppError::with_source(ErrorKind::ServiceUnavailable, context, e)
        }
        _ => AppError::with_source(ErrorKind::Transaction, context, e),
    }
}
