//! Storage port — persistence for the unit collection.

use std::future::Future;

use rentalhub_domain::error::RentalHubError;
use rentalhub_domain::unit::Unit;

/// Repository over the persisted unit collection.
///
/// The collection is read and replaced as a whole; there is no
/// incremental update. Implementations fail soft on `load` — a missing
/// or unreadable dataset yields an empty collection — while `save`
/// failures are fatal and must propagate.
pub trait UnitRepository {
    /// Load the full unit collection.
    fn load(&self) -> impl Future<Output = Result<Vec<Unit>, RentalHubError>> + Send;

    /// Replace the persisted collection with `units`.
    fn save(&self, units: Vec<Unit>) -> impl Future<Output = Result<(), RentalHubError>> + Send;
}
