//! # rentalhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** that persistence adapters implement
//!   ([`ports::UnitRepository`])
//! - Provide the use-case service ([`services::unit_service::UnitService`])
//!   that runs every command and query as a load → expiry sweep → save
//!   cycle over the shared unit collection
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `rentalhub-domain` only (plus `tokio::sync` for the cycle
//! lock). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod services;
