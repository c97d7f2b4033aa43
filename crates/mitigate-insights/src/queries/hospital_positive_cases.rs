use serde_json::{Value, json};

use mitigate_core::entities::{Citizen, CovidCase, Hospital, TestingCenter};

use super::{matches_filter, state_filter};
use crate::error::InsightError;
use crate::membership::{CitizenIndex, active_filter, hospitalized};
use crate::random::{RandomSource, choose};
use crate::table::{InsightRow, InsightTable};

pub const TITLE: &str = "Hospitals Treating Positive Cases";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalAssignmentRow {
    pub first_name: String,
    pub last_name: String,
    pub hospital_name: String,
    pub available_beds: i64,
}

impl InsightRow for HospitalAssignmentRow {
    const COLUMNS: &'static [&'static str] =
        &["First Name", "Last Name", "Hospital Name", "Available Beds"];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.first_name),
            json!(self.last_name),
            json!(self.hospital_name),
            json!(self.available_beds),
        ]
    }
}

/// Positive tests for hospitalized citizens, each paired with a hospital
/// drawn uniformly at random from `hospitals`.
///
/// # Errors
///
/// Returns [`InsightError::NoHospitals`] when at least one row qualifies but
/// `hospitals` is empty, and [`InsightError::Random`] if `rng` fails.
pub fn hospital_positive_cases<R: RandomSource + ?Sized>(
    citizens: &[Citizen],
    cases: &[CovidCase],
    tests: &[TestingCenter],
    hospitals: &[Hospital],
    state: Option<&str>,
    rng: &mut R,
) -> Result<InsightTable<HospitalAssignmentRow>, InsightError> {
    let state = active_filter(state);
    let index = CitizenIndex::new(citizens);
    let admitted = hospitalized(cases);

    let mut rows = Vec::new();
    for test in tests.iter().filter(|t| t.is_positive()) {
        if !admitted.contains(&test.citizen_id) {
            continue;
        }
        let Some(citizen) = index.get(&test.citizen_id) else {
            continue;
        };
        if !matches_filter(&citizen.state, state) {
            continue;
        }
        let hospital = choose(&mut *rng, hospitals)?.ok_or(InsightError::NoHospitals)?;
        rows.push(HospitalAssignmentRow {
            first_name: citizen.first_name.clone(),
            last_name: citizen.last_name.clone(),
            hospital_name: hospital.name.clone(),
            available_beds: hospital.available_beds,
        });
    }

    tracing::debug!(rows = rows.len(), hospitals = hospitals.len(), "hospital_positive_cases");
    Ok(InsightTable::new(TITLE, rows, state_filter(index.states(), state)))
}
