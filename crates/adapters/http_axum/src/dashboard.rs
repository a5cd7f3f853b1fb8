//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod history;
#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod leases;
#[allow(clippy::missing_errors_doc)]
pub mod units;

use axum::Router;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;

use rentalhub_app::ports::UnitRepository;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: UnitRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<R>))
        .route(
            "/units/new",
            get(units::new_form).post(units::create::<R>),
        )
        .route(
            "/leases/new",
            get(leases::new_form::<R>).post(leases::create::<R>),
        )
        .route(
            "/leases/end",
            get(leases::end_form::<R>).post(leases::end::<R>),
        )
        .route("/history", get(history::index::<R>))
}

/// Response from the form handlers (PRG pattern).
pub enum FormResponse {
    /// Redirect back to the home page.
    Redirect(Redirect),
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}
