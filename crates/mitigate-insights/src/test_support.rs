//! Record builders and a scripted random source for unit tests.

use mitigate_core::entities::{
    AwarenessProgram, Citizen, CovidCase, Hospital, TestingCenter, Vaccination,
};
use mitigate_core::ids::CitizenId;

use crate::error::InsightError;
use crate::random::RandomSource;

pub fn citizen(citizen_id: i64, first_name: &str, state: &str) -> Citizen {
    Citizen {
        citizen_id: CitizenId::Number(citizen_id),
        first_name: first_name.to_string(),
        last_name: format!("{first_name}son"),
        age: 35,
        gender: "M".to_string(),
        state: state.to_string(),
        country: "USA".to_string(),
    }
}

pub fn vaccination(citizen_id: &str, vaccine_type: &str, dose_number: i64) -> Vaccination {
    Vaccination {
        citizen_id: CitizenId::from(citizen_id),
        vaccine_type: vaccine_type.to_string(),
        dose_number,
        date_administered: "2021-02-14".to_string(),
        administered_by: "Dr. Patel".to_string(),
        location: "County Clinic".to_string(),
    }
}

pub fn covid_case(citizen_id: &str, hospitalized: &str) -> CovidCase {
    CovidCase {
        citizen_id: CitizenId::from(citizen_id),
        date_positive: "2021-06-02".to_string(),
        severity: "Severe".to_string(),
        hospitalized: hospitalized.to_string(),
        recovery_status: "Under Treatment".to_string(),
        date_updated: "2021-06-09".to_string(),
    }
}

pub fn hospital(name: &str, available_beds: i64) -> Hospital {
    Hospital {
        name: name.to_string(),
        location: "Springfield".to_string(),
        capacity: 250,
        available_beds,
        contact_info: "555-0199".to_string(),
    }
}

pub fn test_result(citizen_id: &str, result: &str) -> TestingCenter {
    test_on(citizen_id, result, "2021-06-01")
}

pub fn test_on(citizen_id: &str, result: &str, test_date: &str) -> TestingCenter {
    TestingCenter {
        name: "Main St Testing".to_string(),
        location: "Springfield".to_string(),
        test_type: "Rapid Antigen".to_string(),
        test_date: test_date.to_string(),
        citizen_id: CitizenId::from(citizen_id),
        result: result.to_string(),
        administered_by: "Nurse Kim".to_string(),
    }
}

pub fn program(name: &str, participants: &[&str]) -> AwarenessProgram {
    AwarenessProgram {
        name: name.to_string(),
        date: "2021-07-04".to_string(),
        location: "Library".to_string(),
        description: "Booster outreach".to_string(),
        conducted_by: "Public Health".to_string(),
        participants: participants.iter().map(|p| CitizenId::from(*p)).collect(),
    }
}

/// Replays a fixed sequence of indices, wrapping each into range.
pub struct Scripted {
    picks: Vec<usize>,
    next: usize,
}

impl Scripted {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, len: usize) -> Result<usize, InsightError> {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        Ok(pick % len)
    }
}

/// A source that always fails.
pub struct Broken;

impl RandomSource for Broken {
    fn next_index(&mut self, _len: usize) -> Result<usize, InsightError> {
        Err(InsightError::Random("entropy unavailable".into()))
    }
}
