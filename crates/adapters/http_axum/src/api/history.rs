//! JSON API handler for the aggregated history feed.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::history::HistoryItem;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the history endpoint.
pub enum HistoryResponse {
    Ok(Json<Vec<HistoryItem>>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/history` — every past lease, newest first.
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<HistoryResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let items = state.unit_service.history().await?;
    Ok(HistoryResponse::Ok(Json(items)))
}
