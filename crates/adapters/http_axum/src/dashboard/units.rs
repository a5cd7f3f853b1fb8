//! Dashboard pages for registering units.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use rentalhub_app::ports::UnitRepository;

use super::FormResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// New-unit form template.
#[derive(Template)]
#[template(path = "unit_new.html")]
pub struct UnitFormTemplate;

impl IntoResponse for UnitFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Form data for registering a unit (legacy field names).
#[derive(Deserialize)]
pub struct UnitForm {
    pub bloco: String,
    pub numero: String,
    pub proprietario: String,
}

/// `GET /units/new` — registration form.
pub async fn new_form() -> UnitFormTemplate {
    UnitFormTemplate
}

/// `POST /units/new` — register a unit (PRG).
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<UnitForm>,
) -> Result<FormResponse, ApiError>
where
    R: UnitRepository + Send + Sync + 'static,
{
    state
        .unit_service
        .add_unit(&form.bloco, &form.numero, &form.proprietario)
        .await?;
    Ok(FormResponse::Redirect(Redirect::to("/")))
}
