//! Unit — a housing unit with owner identity and lease occupancy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ConflictError, RentalHubError, ValidationError};
use crate::id::UnitId;
use crate::lease::{ActiveLease, HistoricalLease, LeaseEnd};

/// A rentable housing unit.
///
/// The legacy dataset carried a separate `locado` flag next to optional
/// lease fields; here occupancy is the presence of [`Unit::lease`], so
/// the flag can never disagree with the fields. History entries are
/// append-only and a unit is never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit identifier, `"<block> | <number>"`.
    #[serde(rename = "unidade")]
    pub id: UnitId,
    /// Display label, `"Casa <number>"`.
    #[serde(rename = "apartamento")]
    pub label: String,
    /// Owner name.
    #[serde(rename = "proprietario")]
    pub owner: String,
    /// The active lease, when the unit is occupied.
    #[serde(rename = "locacao", skip_serializing_if = "Option::is_none")]
    pub lease: Option<ActiveLease>,
    /// Past leases, oldest first.
    #[serde(rename = "historico_locacoes", default)]
    pub history: Vec<HistoricalLease>,
}

impl Unit {
    /// Create a builder for constructing a [`Unit`].
    #[must_use]
    pub fn builder() -> UnitBuilder {
        UnitBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] when the owner name is
    /// empty or the active lease is invalid.
    pub fn validate(&self) -> Result<(), RentalHubError> {
        if self.owner.trim().is_empty() {
            return Err(ValidationError::EmptyOwner.into());
        }
        if let Some(lease) = &self.lease {
            lease.validate()?;
        }
        Ok(())
    }

    /// Whether the unit currently has a tenant.
    #[must_use]
    pub fn is_leased(&self) -> bool {
        self.lease.is_some()
    }

    /// Attach a lease to a vacant unit.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] when the lease is invalid,
    /// or [`RentalHubError::Conflict`] when the unit is already leased —
    /// the previous lease is never silently overwritten.
    pub fn start_lease(&mut self, lease: ActiveLease) -> Result<(), RentalHubError> {
        lease.validate()?;
        if self.lease.is_some() {
            return Err(ConflictError::AlreadyLeased(self.id.to_string()).into());
        }
        self.lease = Some(lease);
        Ok(())
    }

    /// Remove the active lease, historizing it as manually removed on
    /// `today`.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Conflict`] when the unit has no active
    /// lease.
    pub fn end_lease(&mut self, today: NaiveDate) -> Result<(), RentalHubError> {
        match self.lease.take() {
            Some(lease) => {
                self.history.push(lease.into_history(LeaseEnd::Removed(today)));
                Ok(())
            }
            None => Err(ConflictError::NotLeased(self.id.to_string()).into()),
        }
    }

    /// Historize the active lease when its end date has passed.
    ///
    /// Returns `true` when a lease expired. Units with no lease or no
    /// end date are untouched, and running the sweep again with the same
    /// date is a no-op.
    pub fn expire_overdue(&mut self, today: NaiveDate) -> bool {
        if self.lease.as_ref().is_some_and(|lease| lease.is_expired(today)) {
            if let Some(lease) = self.lease.take() {
                self.history.push(lease.into_history(LeaseEnd::Expired(today)));
            }
            return true;
        }
        false
    }

    /// Case-insensitive substring match over id, label, owner, and the
    /// active tenant. Historical tenants are not searched.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.as_str().to_lowercase().contains(&term)
            || self.label.to_lowercase().contains(&term)
            || self.owner.to_lowercase().contains(&term)
            || self
                .lease
                .as_ref()
                .is_some_and(|lease| lease.tenant.to_lowercase().contains(&term))
    }
}

/// Step-by-step builder for a vacant [`Unit`].
#[derive(Debug, Default)]
pub struct UnitBuilder {
    block: Option<String>,
    number: Option<String>,
    owner: Option<String>,
}

impl UnitBuilder {
    #[must_use]
    pub fn block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Consume the builder, validate, and return a vacant [`Unit`].
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] if block, number, or owner
    /// are missing or empty.
    pub fn build(self) -> Result<Unit, RentalHubError> {
        let block = self.block.unwrap_or_default();
        let number = self.number.unwrap_or_default();
        if block.trim().is_empty() {
            return Err(ValidationError::EmptyBlock.into());
        }
        if number.trim().is_empty() {
            return Err(ValidationError::EmptyNumber.into());
        }
        let unit = Unit {
            id: UnitId::from_parts(&block, &number),
            label: format!("Casa {number}"),
            owner: self.owner.unwrap_or_default(),
            lease: None,
            history: Vec::new(),
        };
        unit.validate()?;
        Ok(unit)
    }
}
