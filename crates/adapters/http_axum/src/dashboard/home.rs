//! Dashboard home page — active leases and search.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::date;
use rentalhub_domain::unit::Unit;

use crate::error::ApiError;
use crate::state::AppState;

/// One row on the home page, display-formatted.
pub struct UnitRow {
    pub id: String,
    pub label: String,
    pub owner: String,
    pub tenant: String,
    pub start: String,
    pub end: String,
    pub leased: bool,
}

impl From<&Unit> for UnitRow {
    fn from(unit: &Unit) -> Self {
        let lease = unit.lease.as_ref();
        Self {
            id: unit.id.to_string(),
            label: unit.label.clone(),
            owner: unit.owner.clone(),
            tenant: lease.map(|l| l.tenant.clone()).unwrap_or_default(),
            start: lease.map(|l| date::display(l.start)).unwrap_or_default(),
            end: lease.map(|l| date::display_opt(l.end)).unwrap_or_default(),
            leased: unit.is_leased(),
        }
    }
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    query: String,
    rows: Vec<UnitRow>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query string for the home page search box.
#[derive(Deserialize)]
pub struct HomeQuery {
    pub q: Option<String>,
}

/// `GET /` — active leases, or search results when `q` is present.
pub async fn index<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let (query_text, units) = match query.q {
        Some(term) if !term.is_empty() => {
            let units = state.unit_service.search(&term).await?;
            (term, units)
        }
        _ => (String::new(), state.unit_service.list_active().await?),
    };

    Ok(HomeTemplate {
        query: query_text,
        rows: units.iter().map(UnitRow::from).collect(),
    })
}
