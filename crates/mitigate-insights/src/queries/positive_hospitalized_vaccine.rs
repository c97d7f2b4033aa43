use serde_json::{Value, json};

use mitigate_core::entities::{Citizen, CovidCase, HOSPITALIZED_YES, Vaccination};

use super::matches_filter;
use crate::membership::{CitizenIndex, active_filter, hospitalized, vaccine_options};
use crate::table::{DimensionFilter, InsightRow, InsightTable};

pub const TITLE: &str = "Positive, Hospitalized, and Vaccinated Citizens";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalizedVaccineRow {
    pub first_name: String,
    pub last_name: String,
    pub vaccine_type: String,
    pub dose_number: i64,
}

impl InsightRow for HospitalizedVaccineRow {
    const COLUMNS: &'static [&'static str] = &[
        "First Name",
        "Last Name",
        "Vaccine Type",
        "Dose Number",
        "Hospitalized",
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.first_name),
            json!(self.last_name),
            json!(self.vaccine_type),
            json!(self.dose_number),
            json!(HOSPITALIZED_YES),
        ]
    }
}

/// Vaccinations belonging to hospitalized citizens, one row per dose.
///
/// The filter narrows by the vaccination's `vaccine_type`.
#[must_use]
pub fn positive_hospitalized_vaccine(
    citizens: &[Citizen],
    cases: &[CovidCase],
    vaccinations: &[Vaccination],
    vaccine: Option<&str>,
) -> InsightTable<HospitalizedVaccineRow> {
    let vaccine = active_filter(vaccine);
    let index = CitizenIndex::new(citizens);
    let admitted = hospitalized(cases);

    let rows: Vec<HospitalizedVaccineRow> = vaccinations
        .iter()
        .filter(|vax| admitted.contains(&vax.citizen_id))
        .filter_map(|vax| index.get(&vax.citizen_id).map(|citizen| (vax, citizen)))
        .filter(|(vax, _)| matches_filter(&vax.vaccine_type, vaccine))
        .map(|(vax, citizen)| HospitalizedVaccineRow {
            first_name: citizen.first_name.clone(),
            last_name: citizen.last_name.clone(),
            vaccine_type: vax.vaccine_type.clone(),
            dose_number: vax.dose_number,
        })
        .collect();

    tracing::debug!(rows = rows.len(), "positive_hospitalized_vaccine");
    let filter = DimensionFilter {
        name: "vaccine",
        options: vaccine_options(vaccinations),
        selected: vaccine.map(str::to_string),
    };
    InsightTable::new(TITLE, rows, filter)
}
