//! JSON API handler for unit search.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::date;
use rentalhub_domain::unit::Unit;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for the search endpoint.
#[derive(Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive search term.
    #[serde(default)]
    pub q: String,
}

/// One search result: the unit plus display-formatted lease dates, the
/// shape the legacy search endpoint returned.
#[derive(Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub unit: Unit,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inicio_formatado: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fim_formatado: String,
}

impl From<Unit> for SearchHit {
    fn from(unit: Unit) -> Self {
        let (inicio_formatado, fim_formatado) = match &unit.lease {
            Some(lease) => (date::display(lease.start), date::display_opt(lease.end)),
            None => (String::new(), String::new()),
        };
        Self {
            unit,
            inicio_formatado,
            fim_formatado,
        }
    }
}

/// Possible responses from the search endpoint.
pub enum SearchResponse {
    Ok(Json<Vec<SearchHit>>),
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/search?q=term`
pub async fn search<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<SearchQuery>,
) -> Result<SearchResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let hits = state
        .unit_service
        .search(&query.q)
        .await?
        .into_iter()
        .map(SearchHit::from)
        .collect();
    Ok(SearchResponse::Ok(Json(hits)))
}
