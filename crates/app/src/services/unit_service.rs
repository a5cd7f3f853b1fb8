//! Unit service — use-cases for units, leases, and the history feed.

use chrono::NaiveDate;

use rentalhub_domain::date;
use rentalhub_domain::error::{ConflictError, NotFoundError, RentalHubError};
use rentalhub_domain::history::{self, HistoryItem};
use rentalhub_domain::id::UnitId;
use rentalhub_domain::lease::ActiveLease;
use rentalhub_domain::lifecycle;
use rentalhub_domain::unit::Unit;

use crate::ports::UnitRepository;

/// Application service for unit and lease management.
///
/// Every operation runs a full load → expiry sweep → (mutate) → save
/// cycle against the shared collection. The cycle is serialized by an
/// in-process mutex, so concurrent requests within one process cannot
/// lose updates; writers in other processes still race last-write-wins
/// on the underlying dataset.
pub struct UnitService<R> {
    repo: R,
    cycle: tokio::sync::Mutex<()>,
}

impl<R: UnitRepository> UnitService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cycle: tokio::sync::Mutex::new(()),
        }
    }

    /// Load the collection with overdue leases historized.
    ///
    /// The expiry sweep is a side-effecting upgrade pass: when anything
    /// expired, the collection is persisted before it is returned or
    /// mutated further. Callers must hold the cycle lock.
    async fn load_reconciled(&self, today: NaiveDate) -> Result<Vec<Unit>, RentalHubError> {
        let mut units = self.repo.load().await?;
        let expired = lifecycle::reconcile(&mut units, today);
        if expired > 0 {
            tracing::info!(expired, "moved overdue leases to history");
            self.repo.save(units.clone()).await?;
        }
        Ok(units)
    }

    /// List units that currently have a tenant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_active(&self) -> Result<Vec<Unit>, RentalHubError> {
        let _cycle = self.cycle.lock().await;
        let units = self.load_reconciled(date::today()).await?;
        Ok(units.into_iter().filter(Unit::is_leased).collect())
    }

    /// List units available for a new lease.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_available(&self) -> Result<Vec<Unit>, RentalHubError> {
        let _cycle = self.cycle.lock().await;
        let units = self.load_reconciled(date::today()).await?;
        Ok(units.into_iter().filter(|unit| !unit.is_leased()).collect())
    }

    /// Register a new unit with no lease and an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] when block, number, or
    /// owner are empty, [`RentalHubError::Conflict`] when a unit with the
    /// same id already exists, or a storage error from the repository.
    pub async fn add_unit(
        &self,
        block: &str,
        number: &str,
        owner: &str,
    ) -> Result<Unit, RentalHubError> {
        let unit = Unit::builder()
            .block(block)
            .number(number)
            .owner(owner)
            .build()?;

        let _cycle = self.cycle.lock().await;
        let mut units = self.load_reconciled(date::today()).await?;
        if units.iter().any(|existing| existing.id == unit.id) {
            return Err(ConflictError::DuplicateUnit(unit.id.to_string()).into());
        }
        units.push(unit.clone());
        self.repo.save(units).await?;

        tracing::debug!(id = %unit.id, "registered unit");
        Ok(unit)
    }

    /// Attach a lease to a vacant unit.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] when the lease is invalid,
    /// [`RentalHubError::NotFound`] when no unit has `id`,
    /// [`RentalHubError::Conflict`] when the unit is already leased, or a
    /// storage error from the repository.
    pub async fn start_lease(
        &self,
        id: &UnitId,
        tenant: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Unit, RentalHubError> {
        let lease = ActiveLease::new(tenant, start, end)?;

        let _cycle = self.cycle.lock().await;
        let mut units = self.load_reconciled(date::today()).await?;
        let unit = find_mut(&mut units, id)?;
        unit.start_lease(lease)?;
        let snapshot = unit.clone();
        self.repo.save(units).await?;

        tracing::debug!(id = %snapshot.id, "started lease");
        Ok(snapshot)
    }

    /// End the active lease manually, historizing it with today's date.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::NotFound`] when no unit has `id`,
    /// [`RentalHubError::Conflict`] when the unit has no active lease, or
    /// a storage error from the repository.
    pub async fn end_lease(&self, id: &UnitId) -> Result<Unit, RentalHubError> {
        let today = date::today();

        let _cycle = self.cycle.lock().await;
        let mut units = self.load_reconciled(today).await?;
        let unit = find_mut(&mut units, id)?;
        unit.end_lease(today)?;
        let snapshot = unit.clone();
        self.repo.save(units).await?;

        tracing::debug!(id = %snapshot.id, "ended lease");
        Ok(snapshot)
    }

    /// Case-insensitive substring search over unit identity, owner, and
    /// the active tenant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn search(&self, term: &str) -> Result<Vec<Unit>, RentalHubError> {
        let _cycle = self.cycle.lock().await;
        let units = self.load_reconciled(date::today()).await?;
        Ok(units.into_iter().filter(|unit| unit.matches(term)).collect())
    }

    /// The aggregated history feed, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn history(&self) -> Result<Vec<HistoryItem>, RentalHubError> {
        let _cycle = self.cycle.lock().await;
        let units = self.load_reconciled(date::today()).await?;
        Ok(history::collect(&units))
    }
}

/// Find a unit by id, first match only.
fn find_mut<'a>(units: &'a mut [Unit], id: &UnitId) -> Result<&'a mut Unit, RentalHubError> {
    units
        .iter_mut()
        .find(|unit| &unit.id == id)
        .ok_or_else(|| {
            NotFoundError {
                entity: "Unit",
                id: id.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentalhub_domain::error::ValidationError;
    use rentalhub_domain::lease::LeaseEnd;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct InMemoryUnitRepo {
        store: Arc<Mutex<Vec<Unit>>>,
    }

    impl InMemoryUnitRepo {
        fn with_units(units: Vec<Unit>) -> Self {
            Self {
                store: Arc::new(Mutex::new(units)),
            }
        }

        fn snapshot(&self) -> Vec<Unit> {
            self.store.lock().unwrap().clone()
        }
    }

    impl UnitRepository for InMemoryUnitRepo {
        async fn load(&self) -> Result<Vec<Unit>, RentalHubError> {
            Ok(self.store.lock().unwrap().clone())
        }

        async fn save(&self, units: Vec<Unit>) -> Result<(), RentalHubError> {
            *self.store.lock().unwrap() = units;
            Ok(())
        }
    }

    fn make_service() -> UnitService<InMemoryUnitRepo> {
        UnitService::new(InMemoryUnitRepo::default())
    }

    fn yesterday() -> NaiveDate {
        date::today().pred_opt().unwrap()
    }

    fn tomorrow() -> NaiveDate {
        date::today().succ_opt().unwrap()
    }

    #[tokio::test]
    async fn should_register_unit_as_available() {
        let svc = make_service();

        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();
        assert_eq!(unit.id.as_str(), "B | 2");

        let available = svc.list_available().await.unwrap();
        assert_eq!(available.len(), 1);
        assert!(svc.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_duplicate_unit_id() {
        let svc = make_service();
        svc.add_unit("B", "2", "Alice").await.unwrap();

        let result = svc.add_unit("B", "2", "Someone Else").await;
        assert!(matches!(
            result,
            Err(RentalHubError::Conflict(ConflictError::DuplicateUnit(_)))
        ));
    }

    #[tokio::test]
    async fn should_reject_unit_with_empty_owner() {
        let svc = make_service();
        let result = svc.add_unit("B", "2", "").await;
        assert!(matches!(
            result,
            Err(RentalHubError::Validation(ValidationError::EmptyOwner))
        ));
    }

    #[tokio::test]
    async fn should_start_lease_and_list_unit_as_active() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();

        let leased = svc
            .start_lease(&unit.id, "Bob", date::today(), Some(tomorrow()))
            .await
            .unwrap();
        assert_eq!(leased.lease.as_ref().unwrap().tenant, "Bob");

        let active = svc.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert!(svc.list_available().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_leasing_unknown_unit() {
        let svc = make_service();
        let result = svc
            .start_lease(&UnitId::from("Z | 9"), "Bob", date::today(), None)
            .await;
        assert!(matches!(result, Err(RentalHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_second_lease_on_same_unit() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();
        svc.start_lease(&unit.id, "Bob", date::today(), None)
            .await
            .unwrap();

        let result = svc.start_lease(&unit.id, "Carla", date::today(), None).await;
        assert!(matches!(
            result,
            Err(RentalHubError::Conflict(ConflictError::AlreadyLeased(_)))
        ));
    }

    #[tokio::test]
    async fn should_reject_backwards_lease_period() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();

        let result = svc
            .start_lease(&unit.id, "Bob", tomorrow(), Some(date::today()))
            .await;
        assert!(matches!(
            result,
            Err(RentalHubError::Validation(
                ValidationError::InvalidPeriod { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn should_end_lease_with_manual_removal_entry() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();
        svc.start_lease(&unit.id, "Bob", date::today(), Some(tomorrow()))
            .await
            .unwrap();

        let ended = svc.end_lease(&unit.id).await.unwrap();

        assert!(!ended.is_leased());
        assert_eq!(ended.history.len(), 1);
        assert_eq!(ended.history[0].tenant, "Bob");
        assert_eq!(ended.history[0].ended, LeaseEnd::Removed(date::today()));
        assert!(svc.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_ending_lease_on_vacant_unit() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();

        let result = svc.end_lease(&unit.id).await;
        assert!(matches!(
            result,
            Err(RentalHubError::Conflict(ConflictError::NotLeased(_)))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_ending_lease_on_unknown_unit() {
        let svc = make_service();
        let result = svc.end_lease(&UnitId::from("Z | 9")).await;
        assert!(matches!(result, Err(RentalHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_expire_overdue_lease_and_persist_it() {
        let mut unit = Unit::builder()
            .block("A")
            .number("1")
            .owner("Alice")
            .build()
            .unwrap();
        unit.start_lease(
            ActiveLease::new("Bob", yesterday().pred_opt().unwrap(), Some(yesterday())).unwrap(),
        )
        .unwrap();

        let repo = InMemoryUnitRepo::with_units(vec![unit]);
        let svc = UnitService::new(repo.clone());

        assert!(svc.list_active().await.unwrap().is_empty());

        // The sweep was persisted, not just applied to the returned copy.
        let stored = repo.snapshot();
        assert!(!stored[0].is_leased());
        assert_eq!(stored[0].history.len(), 1);
        assert_eq!(
            stored[0].history[0].ended,
            LeaseEnd::Expired(date::today())
        );
    }

    #[tokio::test]
    async fn should_free_expired_unit_for_a_new_lease() {
        let mut unit = Unit::builder()
            .block("A")
            .number("1")
            .owner("Alice")
            .build()
            .unwrap();
        unit.start_lease(
            ActiveLease::new("Bob", yesterday().pred_opt().unwrap(), Some(yesterday())).unwrap(),
        )
        .unwrap();

        let svc = UnitService::new(InMemoryUnitRepo::with_units(vec![unit]));

        let leased = svc
            .start_lease(&UnitId::from("A | 1"), "Carla", date::today(), None)
            .await
            .unwrap();

        assert_eq!(leased.lease.as_ref().unwrap().tenant, "Carla");
        assert_eq!(leased.history.len(), 1);
        assert_eq!(leased.history[0].tenant, "Bob");
    }

    #[tokio::test]
    async fn should_search_owner_case_insensitively() {
        let svc = make_service();
        svc.add_unit("B", "2", "Alice Souza").await.unwrap();
        svc.add_unit("C", "3", "Marcos").await.unwrap();

        let hits = svc.search("alice").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].owner, "Alice Souza");
    }

    #[tokio::test]
    async fn should_search_active_tenant_but_not_historical_ones() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();
        svc.start_lease(&unit.id, "Bob", date::today(), None)
            .await
            .unwrap();
        assert_eq!(svc.search("bob").await.unwrap().len(), 1);

        svc.end_lease(&unit.id).await.unwrap();
        assert!(svc.search("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_aggregate_history_newest_first() {
        let svc = make_service();
        let unit = svc.add_unit("B", "2", "Alice").await.unwrap();
        svc.start_lease(&unit.id, "Bob", date::today(), None)
            .await
            .unwrap();
        svc.end_lease(&unit.id).await.unwrap();
        svc.start_lease(&unit.id, "Carla", date::today(), None)
            .await
            .unwrap();
        svc.end_lease(&unit.id).await.unwrap();

        let feed = svc.history().await.unwrap();
        assert_eq!(feed.len(), 2);
        // Same event date for both entries keeps append order.
        assert_eq!(feed[0].tenant, "Bob");
        assert_eq!(feed[1].tenant, "Carla");
        assert_eq!(feed[0].event_date, date::display(date::today()));
    }
}
