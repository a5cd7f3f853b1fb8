//! # rentalhub-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole unit collection lives in one
//! JSON document, keeping the legacy `dados.json` layout.
//!
//! ## Responsibilities
//! - Implement the storage port defined in `rentalhub-app::ports::storage`
//! - Parse the persisted form strictly into typed domain records
//! - Fail soft on load (missing or corrupt dataset → empty collection)
//! - Replace the dataset atomically on save (write temp file, rename)
//!
//! ## Dependency rule
//! Depends on `rentalhub-app` (for the port trait) and `rentalhub-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod record;
pub mod repository;

pub use error::StorageError;
pub use repository::JsonUnitRepository;
