//! Shared application state for axum handlers.

use std::sync::Arc;

use rentalhub_app::ports::UnitRepository;
use rentalhub_app::services::unit_service::UnitService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Unit and lease use-case service.
    pub unit_service: Arc<UnitService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            unit_service: Arc::clone(&self.unit_service),
        }
    }
}

impl<R: UnitRepository + Send + Sync + 'static> AppState<R> {
    /// Create a new application state from the service instance.
    pub fn new(unit_service: UnitService<R>) -> Self {
        Self {
            unit_service: Arc::new(unit_service),
        }
    }
}
