//! # rentalhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for programmatic access
//!   (`/api/units`, `/api/search`, `/api/history`)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript** — pure HTML forms posting back to the server
//!   and redirecting (PRG pattern)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! Request parsing is the validation boundary: form and JSON dates are
//! parsed into typed values here and rejected before the core is called.
//!
//! ## Dependency rule
//! Depends on `rentalhub-app` (for the port trait and service) and
//! `rentalhub-domain` (for domain types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
