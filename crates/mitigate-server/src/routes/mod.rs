//! Router assembly.
//!
//! Entity routes follow one pattern: `/<plural>` lists, `/<singular>/add`
//! creates, `/<singular>/edit/{id}` reads (GET) or updates (POST) and
//! `/<singular>/delete/{id}` deletes. Citizens are addressed by `citizen_id`,
//! everything else by store ID.

mod citizens;
mod dashboard;
mod insights;
mod records;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use mitigate_core::forms::{
    AwarenessProgramForm, CovidCaseForm, HospitalForm, TestingCenterForm, VaccinationForm,
};

use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(dashboard::home))
        .route("/health", get(health))
        .merge(citizens::routes())
        .merge(records::routes::<VaccinationForm>())
        .merge(records::routes::<CovidCaseForm>())
        .merge(records::routes::<HospitalForm>())
        .merge(records::routes::<TestingCenterForm>())
        .merge(records::routes::<AwarenessProgramForm>())
        .merge(insights::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
