//! Error handling utilities for repositories

use refill_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a failed write: unique violations become the caller's conflict error,
/// foreign-key violations become "referenced entity not found"
pub fn map_write_error<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            let reference = db_err.constraint().map_or("referenced entity", referenced_entity);
            return DomainError::ReferenceNotFound(reference.to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a failed write on a table without unique constraints
pub fn map_reference_error(e: SqlxError) -> DomainError {
    map_write_error(e, || {
        DomainError::DatabaseError("unexpected unique violation".to_string())
    })
}

/// Name of the entity a foreign key constraint (`fk_<table>_<entity>`) points to
fn referenced_entity(constraint: &str) -> &'static str {
    match constraint.rsplit('_').next() {
        Some("user") => "user",
        Some("station") => "refill station",
        Some("bottle") => "bottle",
        Some("test") => "consumer test",
        Some("question") => "consumer test question",
        _ => "referenced entity",
    }
}
