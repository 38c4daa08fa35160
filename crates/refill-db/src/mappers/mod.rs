//! Entity to model mappers
//!
//! Conversions between domain entities (refill-core) and database models.
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects; a row
//!   holding a value outside an enum's allow-list is reported as a database error
//! - `*Insert` structs: prepare entity data for database writes

mod bottle;
mod like;
mod problem;
mod review;
mod station;
mod transaction;
mod user;

pub use bottle::BottleInsert;
pub use problem::ProblemInsert;
pub use review::ReviewInsert;
pub use station::StationInsert;
pub use transaction::TransactionInsert;

use refill_core::{DomainError, ValidationError};

/// Report a stored value that no longer parses
fn corrupt_row(table: &str, id: i64, err: ValidationError) -> DomainError {
    DomainError::DatabaseError(format!("corrupt row {table}#{id}: {err}"))
}
