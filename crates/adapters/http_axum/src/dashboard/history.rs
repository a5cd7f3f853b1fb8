//! Dashboard page for the aggregated lease history.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::history::HistoryItem;

use crate::error::ApiError;
use crate::state::AppState;

/// History page template.
#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    items: Vec<HistoryItem>,
}

impl IntoResponse for HistoryTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /history` — every past lease, newest first.
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<HistoryTemplate, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let items = state.unit_service.history().await?;
    Ok(HistoryTemplate { items })
}
