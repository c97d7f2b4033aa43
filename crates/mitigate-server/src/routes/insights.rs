//! `/insight/*` report handlers.
//!
//! Each handler loads the collections its query joins and hands them to
//! `mitigate_insights::queries`. Testing results and COVID cases are narrowed
//! store-side where the query only looks at one value.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use mitigate_core::entities::{
    AwarenessProgram, Citizen, Hospital, RESULT_NEGATIVE, RESULT_POSITIVE, Vaccination,
};
use mitigate_insights::queries::{
    self, AwarenessRow, HospitalAssignmentRow, HospitalizedVaccineRow, PositiveAfterVaccineRow,
};
use mitigate_insights::{InsightTable, OsRandom};

use crate::error::AppError;
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/insight/vaccinated_tested_awareness",
            get(vaccinated_tested_awareness),
        )
        .route("/insight/hospital_positive_cases", get(hospital_positive_cases))
        .route(
            "/insight/positive_hospitalized_vaccine",
            get(positive_hospitalized_vaccine),
        )
        .route("/insight/vaccinated_then_positive", get(vaccinated_then_positive))
}

#[derive(Debug, Default, Deserialize)]
pub struct StateFilter {
    pub state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VaccineFilter {
    pub vaccine: Option<String>,
}

async fn vaccinated_tested_awareness(
    State(state): State<SharedState>,
    Query(filter): Query<StateFilter>,
) -> Result<Json<InsightTable<AwarenessRow>>, AppError> {
    let service = &state.service;
    let citizens = service.load_records::<Citizen>().await?;
    let vaccinations = service.load_records::<Vaccination>().await?;
    let negative = service.load_test_results(RESULT_NEGATIVE).await?;
    let programs = service.load_records::<AwarenessProgram>().await?;

    Ok(Json(queries::vaccinated_tested_awareness(
        &citizens,
        &vaccinations,
        &negative,
        &programs,
        filter.state.as_deref(),
    )))
}

async fn hospital_positive_cases(
    State(state): State<SharedState>,
    Query(filter): Query<StateFilter>,
) -> Result<Json<InsightTable<HospitalAssignmentRow>>, AppError> {
    let service = &state.service;
    let citizens = service.load_records::<Citizen>().await?;
    let admitted = service.load_hospitalized_cases().await?;
    let positive = service.load_test_results(RESULT_POSITIVE).await?;
    let hospitals = service.load_records::<Hospital>().await?;

    let table = queries::hospital_positive_cases(
        &citizens,
        &admitted,
        &positive,
        &hospitals,
        filter.state.as_deref(),
        &mut OsRandom,
    )?;
    Ok(Json(table))
}

async fn positive_hospitalized_vaccine(
    State(state): State<SharedState>,
    Query(filter): Query<VaccineFilter>,
) -> Result<Json<InsightTable<HospitalizedVaccineRow>>, AppError> {
    let service = &state.service;
    let citizens = service.load_records::<Citizen>().await?;
    let admitted = service.load_hospitalized_cases().await?;
    let vaccinations = service.load_records::<Vaccination>().await?;

    Ok(Json(queries::positive_hospitalized_vaccine(
        &citizens,
        &admitted,
        &vaccinations,
        filter.vaccine.as_deref(),
    )))
}

async fn vaccinated_then_positive(
    State(state): State<SharedState>,
    Query(filter): Query<StateFilter>,
) -> Result<Json<InsightTable<PositiveAfterVaccineRow>>, AppError> {
    let service = &state.service;
    let citizens = service.load_records::<Citizen>().await?;
    let vaccinations = service.load_records::<Vaccination>().await?;
    let positive = service.load_test_results(RESULT_POSITIVE).await?;

    Ok(Json(queries::vaccinated_then_positive(
        &citizens,
        &vaccinations,
        &positive,
        filter.state.as_deref(),
    )))
}
