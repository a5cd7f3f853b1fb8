//! Lease records — the active lease on a unit and historized past leases.
//!
//! Serde names stay in the persisted form's vocabulary (`locatario`,
//! `inicio`, `fim`, `data_expiracao`, `data_remocao`) so existing
//! datasets keep working.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RentalHubError, ValidationError};

/// The current occupancy of a leased unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLease {
    /// Tenant name.
    #[serde(rename = "locatario")]
    pub tenant: String,
    /// First day of the lease.
    #[serde(rename = "inicio")]
    pub start: NaiveDate,
    /// Last day of the lease. Open-ended leases have no end date and
    /// never expire on their own.
    #[serde(rename = "fim")]
    pub end: Option<NaiveDate>,
}

impl ActiveLease {
    /// Build a lease after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] when the tenant name is
    /// empty or the period runs backwards.
    pub fn new(
        tenant: impl Into<String>,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Self, RentalHubError> {
        let lease = Self {
            tenant: tenant.into(),
            start,
            end,
        };
        lease.validate()?;
        Ok(lease)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RentalHubError::Validation`] when the tenant name is
    /// empty or `start` is after `end`.
    pub fn validate(&self) -> Result<(), RentalHubError> {
        if self.tenant.trim().is_empty() {
            return Err(ValidationError::EmptyTenant.into());
        }
        if let Some(end) = self.end {
            if self.start > end {
                return Err(ValidationError::InvalidPeriod {
                    start: self.start,
                    end,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Whether the lease has run out as of `today`.
    ///
    /// A lease expires only once its end date is strictly in the past;
    /// on the end date itself it is still active.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end.is_some_and(|end| end < today)
    }

    /// Historize the lease with the given terminal event.
    #[must_use]
    pub fn into_history(self, ended: LeaseEnd) -> HistoricalLease {
        HistoricalLease {
            tenant: self.tenant,
            start: self.start,
            end: self.end,
            ended,
        }
    }
}

/// How a past lease came to an end.
///
/// The variant is the tag in the persisted form: expired leases carry
/// `data_expiracao`, manually removed ones `data_remocao`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseEnd {
    /// The end date passed and the expiry sweep historized the lease.
    #[serde(rename = "data_expiracao")]
    Expired(NaiveDate),
    /// The lease was removed manually before (or without) expiring.
    #[serde(rename = "data_remocao")]
    Removed(NaiveDate),
}

impl LeaseEnd {
    /// The date the lease stopped being active.
    #[must_use]
    pub fn date(self) -> NaiveDate {
        match self {
            Self::Expired(date) | Self::Removed(date) => date,
        }
    }
}

/// A finished lease, kept append-only in the owning unit's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalLease {
    /// Tenant name.
    #[serde(rename = "locatario")]
    pub tenant: String,
    /// First day of the lease.
    #[serde(rename = "inicio")]
    pub start: NaiveDate,
    /// Last day of the lease, when one was agreed.
    #[serde(rename = "fim")]
    pub end: Option<NaiveDate>,
    /// Terminal event, flattened into the record as its tag field.
    #[serde(flatten)]
    pub ended: LeaseEnd,
}
