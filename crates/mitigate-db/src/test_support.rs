//! Shared test utilities for mitigate-db unit tests.

pub(crate) mod helpers {
    use mitigate_core::entities::{
        AwarenessProgram, Citizen, CovidCase, Hospital, TestingCenter, Vaccination,
    };
    use mitigate_core::ids::CitizenId;

    use crate::MitigateDb;
    use crate::service::MitigateService;

    /// Create an in-memory service.
    pub async fn test_service() -> MitigateService {
        let db = MitigateDb::open_local(":memory:").await.unwrap();
        MitigateService::from_db(db)
    }

    pub fn citizen(citizen_id: i64, first_name: &str, state: &str) -> Citizen {
        Citizen {
            citizen_id: CitizenId::Number(citizen_id),
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            age: 40,
            gender: "F".to_string(),
            state: state.to_string(),
            country: "USA".to_string(),
        }
    }

    pub fn vaccination(citizen_id: &str, vaccine_type: &str, dose_number: i64) -> Vaccination {
        Vaccination {
            citizen_id: CitizenId::from(citizen_id),
            vaccine_type: vaccine_type.to_string(),
            dose_number,
            date_administered: "2021-03-01".to_string(),
            administered_by: "Dr. Smith".to_string(),
            location: "Clinic".to_string(),
        }
    }

    pub fn covid_case(citizen_id: &str, hospitalized: &str) -> CovidCase {
        CovidCase {
            citizen_id: CitizenId::from(citizen_id),
            date_positive: "2021-04-01".to_string(),
            severity: "Moderate".to_string(),
            hospitalized: hospitalized.to_string(),
            recovery_status: "Recovering".to_string(),
            date_updated: "2021-04-10".to_string(),
        }
    }

    pub fn hospital(name: &str, available_beds: i64) -> Hospital {
        Hospital {
            name: name.to_string(),
            location: "Albany".to_string(),
            capacity: 100,
            available_beds,
            contact_info: "555-0100".to_string(),
        }
    }

    pub fn test_result(citizen_id: &str, result: &str) -> TestingCenter {
        TestingCenter {
            name: "Downtown Testing".to_string(),
            location: "Albany".to_string(),
            test_type: "PCR".to_string(),
            test_date: "2021-04-01".to_string(),
            citizen_id: CitizenId::from(citizen_id),
            result: result.to_string(),
            administered_by: "Nurse Lee".to_string(),
        }
    }

    pub fn program(name: &str, participants: &[&str]) -> AwarenessProgram {
        AwarenessProgram {
            name: name.to_string(),
            date: "2021-05-01".to_string(),
            location: "Town Hall".to_string(),
            description: "Vaccine awareness".to_string(),
            conducted_by: "Health Dept".to_string(),
            participants: participants.iter().map(|p| CitizenId::from(*p)).collect(),
        }
    }
}
