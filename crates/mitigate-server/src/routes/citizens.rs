//! Citizen routes, addressed by the integer `citizen_id`.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use mitigate_core::entities::{Citizen, Record, Stored};
use mitigate_core::errors::CoreError;
use mitigate_core::forms::CitizenForm;

use super::records::to_list;
use crate::error::AppError;
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/citizens", get(list))
        .route("/citizen/add", post(add))
        .route("/citizen/edit/{citizen_id}", get(show).post(edit))
        .route("/citizen/delete/{citizen_id}", get(delete))
}

fn parse_citizen_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "citizen_id must be an integer, got '{raw}'"
        )))
    })
}

async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Stored<Citizen>>>, AppError> {
    Ok(Json(state.service.list_citizens().await?))
}

async fn add(
    State(state): State<SharedState>,
    Form(form): Form<CitizenForm>,
) -> Result<Redirect, AppError> {
    let citizen = form.into_record()?;
    state.service.create_record(&citizen).await?;
    tracing::info!(citizen_id = %citizen.citizen_id, "citizen created");
    Ok(to_list::<Citizen>())
}

async fn show(
    State(state): State<SharedState>,
    Path(raw): Path<String>,
) -> Result<Json<Stored<Citizen>>, AppError> {
    let citizen_id = parse_citizen_id(&raw)?;
    state
        .service
        .find_citizen(citizen_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Citizen::COLLECTION, citizen_id))
}

async fn edit(
    State(state): State<SharedState>,
    Path(raw): Path<String>,
    Form(form): Form<CitizenForm>,
) -> Result<Redirect, AppError> {
    let citizen_id = parse_citizen_id(&raw)?;
    let citizen = form.into_edit(citizen_id)?;
    state.service.update_citizen(citizen_id, &citizen).await?;
    Ok(to_list::<Citizen>())
}

async fn delete(
    State(state): State<SharedState>,
    Path(raw): Path<String>,
) -> Result<Redirect, AppError> {
    let citizen_id = parse_citizen_id(&raw)?;
    state.service.delete_citizen(citizen_id).await?;
    Ok(to_list::<Citizen>())
}
