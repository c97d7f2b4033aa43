use axum::Json;
use axum::extract::State;

use mitigate_insights::charts::Dashboard;

use crate::error::AppError;
use crate::state::SharedState;

/// The three home page charts, grouped store-side.
pub async fn home(State(state): State<SharedState>) -> Result<Json<Dashboard>, AppError> {
    let service = &state.service;
    let by_vaccine_type = service.count_vaccinations_by_type().await?;
    let by_state = service.count_citizens_by_state().await?;
    let by_dose = service.count_vaccinations_by_dose_and_type().await?;

    Ok(Json(Dashboard::build(&by_vaccine_type, &by_state, &by_dose)))
}
