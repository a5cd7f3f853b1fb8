//! Dashboard pages for starting and ending leases.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::date;
use rentalhub_domain::error::RentalHubError;
use rentalhub_domain::id::UnitId;
use rentalhub_domain::unit::Unit;

use super::FormResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// One entry in the unit dropdowns.
pub struct UnitOption {
    pub id: String,
    pub label: String,
    pub owner: String,
}

impl From<&Unit> for UnitOption {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.to_string(),
            label: unit.label.clone(),
            owner: unit.owner.clone(),
        }
    }
}

/// Start-lease form template.
#[derive(Template)]
#[template(path = "lease_new.html")]
pub struct LeaseFormTemplate {
    units: Vec<UnitOption>,
}

impl IntoResponse for LeaseFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// End-lease form template.
#[derive(Template)]
#[template(path = "lease_end.html")]
pub struct LeaseEndTemplate {
    units: Vec<UnitOption>,
}

impl IntoResponse for LeaseEndTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Form data for starting a lease (legacy field names). Dates arrive
/// as raw strings and are parsed here, at the validation boundary.
#[derive(Deserialize)]
pub struct LeaseForm {
    pub unidade: String,
    pub locatario: String,
    pub inicio: String,
    #[serde(default)]
    pub fim: String,
}

/// Form data for ending a lease.
#[derive(Deserialize)]
pub struct EndLeaseForm {
    pub unidade: String,
}

/// `GET /leases/new` — vacant units to lease.
pub async fn new_form<R>(
    State(state): State<AppState<R>>,
) -> Result<LeaseFormTemplate, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let units = state.unit_service.list_available().await?;
    Ok(LeaseFormTemplate {
        units: units.iter().map(UnitOption::from).collect(),
    })
}

/// `POST /leases/new` — start a lease (PRG).
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<LeaseForm>,
) -> Result<FormResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let inicio = date::parse_iso(&form.inicio).map_err(RentalHubError::from)?;
    let fim = if form.fim.is_empty() {
        None
    } else {
        Some(date::parse_iso(&form.fim).map_err(RentalHubError::from)?)
    };

    let id = UnitId::from(form.unidade);
    state
        .unit_service
        .start_lease(&id, &form.locatario, inicio, fim)
        .await?;
    Ok(FormResponse::Redirect(Redirect::to("/")))
}

/// `GET /leases/end` — leased units to release.
pub async fn end_form<R>(State(state): State<AppState<R>>) -> Result<LeaseEndTemplate, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let units = state.unit_service.list_active().await?;
    Ok(LeaseEndTemplate {
        units: units.iter().map(UnitOption::from).collect(),
    })
}

/// `POST /leases/end` — end a lease manually (PRG).
pub async fn end<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<EndLeaseForm>,
) -> Result<FormResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let id = UnitId::from(form.unidade);
    state.unit_service.end_lease(&id).await?;
    Ok(FormResponse::Redirect(Redirect::to("/")))
}
