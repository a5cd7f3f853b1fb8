//! JSON API handlers for units and their leases.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Deserialize;

use rentalhub_app::ports::UnitRepository;
use rentalhub_domain::id::UnitId;
use rentalhub_domain::unit::Unit;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a unit (legacy form vocabulary).
#[derive(Deserialize)]
pub struct CreateUnitRequest {
    pub bloco: String,
    pub numero: String,
    pub proprietario: String,
}

/// Request body for starting a lease.
#[derive(Deserialize)]
pub struct StartLeaseRequest {
    pub locatario: String,
    pub inicio: NaiveDate,
    #[serde(default)]
    pub fim: Option<NaiveDate>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Unit>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Unit>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the lease endpoints.
pub enum LeaseResponse {
    Ok(Json<Unit>),
}

impl IntoResponse for LeaseResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/units` — units with an active lease.
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let units = state.unit_service.list_active().await?;
    Ok(ListResponse::Ok(Json(units)))
}

/// `POST /api/units`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateUnitRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let unit = state
        .unit_service
        .add_unit(&req.bloco, &req.numero, &req.proprietario)
        .await?;
    Ok(CreateResponse::Created(Json(unit)))
}

/// `POST /api/units/{id}/lease`
pub async fn start_lease<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<StartLeaseRequest>,
) -> Result<LeaseResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let id = UnitId::from(id);
    let unit = state
        .unit_service
        .start_lease(&id, &req.locatario, req.inicio, req.fim)
        .await?;
    Ok(LeaseResponse::Ok(Json(unit)))
}

/// `DELETE /api/units/{id}/lease`
pub async fn end_lease<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<LeaseResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    let id = UnitId::from(id);
    let unit = state.unit_service.end_lease(&id).await?;
    Ok(LeaseResponse::Ok(Json(unit)))
}
