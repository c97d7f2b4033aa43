use serde_json::{Value, json};

use mitigate_core::entities::{Citizen, TestingCenter, Vaccination};

use super::{STATUS_VACCINATED, matches_filter, state_filter};
use crate::membership::{CitizenIndex, active_filter, vaccinated};
use crate::table::{InsightRow, InsightTable};

pub const TITLE: &str = "Vaccinated Citizens Who Tested Positive";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveAfterVaccineRow {
    pub first_name: String,
    pub last_name: String,
    pub state: String,
    pub test_date: String,
    pub test_result: String,
}

impl InsightRow for PositiveAfterVaccineRow {
    const COLUMNS: &'static [&'static str] = &[
        "First Name",
        "Last Name",
        "State",
        "Test Date",
        "Test Result",
        "Vaccination Status",
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.first_name),
            json!(self.last_name),
            json!(self.state),
            json!(self.test_date),
            json!(self.test_result),
            json!(STATUS_VACCINATED),
        ]
    }
}

/// Positive tests taken by citizens with any recorded vaccination.
#[must_use]
pub fn vaccinated_then_positive(
    citizens: &[Citizen],
    vaccinations: &[Vaccination],
    tests: &[TestingCenter],
    state: Option<&str>,
) -> InsightTable<PositiveAfterVaccineRow> {
    let state = active_filter(state);
    let index = CitizenIndex::new(citizens);
    let vaccinated = vaccinated(vaccinations);

    let rows: Vec<PositiveAfterVaccineRow> = tests
        .iter()
        .filter(|test| test.is_positive() && vaccinated.contains(&test.citizen_id))
        .filter_map(|test| index.get(&test.citizen_id).map(|citizen| (test, citizen)))
        .filter(|(_, citizen)| matches_filter(&citizen.state, state))
        .map(|(test, citizen)| PositiveAfterVaccineRow {
            first_name: citizen.first_name.clone(),
            last_name: citizen.last_name.clone(),
            state: citizen.state.clone(),
            test_date: test.test_date.clone(),
            test_result: test.result.clone(),
        })
        .collect();

    tracing::debug!(rows = rows.len(), "vaccinated_then_positive");
    InsightTable::new(TITLE, rows, state_filter(index.states(), state))
}
