//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod history;
#[allow(clippy::missing_errors_doc)]
pub mod search;
#[allow(clippy::missing_errors_doc)]
pub mod units;

use axum::Router;
use axum::routing::get;

use rentalhub_app::ports::UnitRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: UnitRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/units", get(units::list::<R>).post(units::create::<R>))
        .route(
            "/units/{id}/lease",
            axum::routing::post(units::start_lease::<R>).delete(units::end_lease::<R>),
        )
        .route("/search", get(search::search::<R>))
        .route("/history", get(history::list::<R>))
}
