use serde_json::{Value, json};

use mitigate_core::entities::{AwarenessProgram, Citizen, RESULT_NEGATIVE, TestingCenter, Vaccination};

use super::{STATUS_VACCINATED, matches_filter, state_filter};
use crate::membership::{CitizenIndex, active_filter, tested_negative, vaccinated};
use crate::table::{InsightRow, InsightTable};

pub const TITLE: &str = "Vaccinated, Tested Negative, and Attended Awareness Program";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwarenessRow {
    pub first_name: String,
    pub last_name: String,
    pub program_name: String,
}

impl InsightRow for AwarenessRow {
    const COLUMNS: &'static [&'static str] = &[
        "First Name",
        "Last Name",
        "Program Name",
        "Test Result",
        "Vaccination Status",
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.first_name),
            json!(self.last_name),
            json!(self.program_name),
            json!(RESULT_NEGATIVE),
            json!(STATUS_VACCINATED),
        ]
    }
}

/// Citizens who are vaccinated, have a negative test, and attended an
/// awareness program. One row per (program, participant) pairing.
#[must_use]
pub fn vaccinated_tested_awareness(
    citizens: &[Citizen],
    vaccinations: &[Vaccination],
    tests: &[TestingCenter],
    programs: &[AwarenessProgram],
    state: Option<&str>,
) -> InsightTable<AwarenessRow> {
    let state = active_filter(state);
    let index = CitizenIndex::new(citizens);
    let vaccinated = vaccinated(vaccinations);
    let negative = tested_negative(tests);

    let rows: Vec<AwarenessRow> = programs
        .iter()
        .flat_map(|program| {
            program
                .participants
                .iter()
                .map(move |participant| (program, participant))
        })
        .filter(|(_, id)| vaccinated.contains(id) && negative.contains(id))
        .filter_map(|(program, id)| index.get(id).map(|citizen| (program, citizen)))
        .filter(|(_, citizen)| matches_filter(&citizen.state, state))
        .map(|(program, citizen)| AwarenessRow {
            first_name: citizen.first_name.clone(),
            last_name: citizen.last_name.clone(),
            program_name: program.name.clone(),
        })
        .collect();

    tracing::debug!(rows = rows.len(), programs = programs.len(), "vaccinated_tested_awareness");
    InsightTable::new(TITLE, rows, state_filter(index.states(), state))
}
