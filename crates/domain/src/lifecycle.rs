//! Lease expiry sweep — moves overdue active leases into unit history.

use chrono::NaiveDate;

use crate::unit::Unit;

/// Expire every overdue active lease in `units` as of `today`, returning
/// how many leases expired.
///
/// A lease is overdue when it has an end date strictly before `today`.
/// Each expired lease is appended to its unit's history with the sweep
/// date recorded as `data_expiracao`, and the unit becomes vacant. Units
/// without a lease or without an end date are untouched.
///
/// The sweep is idempotent: a second pass with the same date changes
/// nothing. Callers run it at the start of every operation against the
/// collection and persist the result whenever it expired anything — it
/// is an upgrade pass over the dataset, not a pure query.
pub fn reconcile(units: &mut [Unit], today: NaiveDate) -> usize {
    units
        .iter_mut()
        .map(|unit| usize::from(unit.expire_overdue(today)))
        .sum()
}
