//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RentalHubError`] via `#[from]` (no `String` variants).

use chrono::NaiveDate;

/// Base error enum for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum RentalHubError {
    /// A domain invariant or input constraint was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The operation contradicts the current state of a record.
    #[error("conflict: {0}")]
    Conflict(#[from] ConflictError),

    /// The storage layer failed; the concrete error lives in the adapter.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants or edge-validated input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A unit's block identifier is empty.
    #[error("unit block must not be empty")]
    EmptyBlock,
    /// A unit's number is empty.
    #[error("unit number must not be empty")]
    EmptyNumber,
    /// A unit's owner name is empty.
    #[error("owner name must not be empty")]
    EmptyOwner,
    /// A lease's tenant name is empty.
    #[error("tenant name must not be empty")]
    EmptyTenant,
    /// A lease starts after it ends.
    #[error("lease start {start} is after its end {end}")]
    InvalidPeriod {
        /// First day of the lease.
        start: NaiveDate,
        /// Last day of the lease.
        end: NaiveDate,
    },
    /// A date string is not in the `YYYY-MM-DD` form.
    #[error("not a valid YYYY-MM-DD date: {0:?}")]
    InvalidDate(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// The operation is valid in general but not against the record's state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    /// A unit with the same identifier already exists.
    #[error("a unit with id {0} already exists")]
    DuplicateUnit(String),
    /// The unit already has an active lease.
    #[error("unit {0} already has an active lease")]
    AlreadyLeased(String),
    /// The unit has no active lease to end.
    #[error("unit {0} has no active lease")]
    NotLeased(String),
}
