//! # rentalhub-domain
//!
//! Pure domain model for the rentalhub rental-unit tracker.
//!
//! ## Responsibilities
//! - Foundational types: unit identity, error conventions, date helpers
//! - Define **Units** (housing units with an owner and lease occupancy)
//! - Define **Leases** (the active lease on a unit and historized past leases)
//! - Lease lifecycle: expire overdue active leases into per-unit history
//! - History aggregation: flatten per-unit histories into one sorted feed
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod date;
pub mod error;
pub mod history;
pub mod id;
pub mod lease;
pub mod lifecycle;
pub mod unit;
