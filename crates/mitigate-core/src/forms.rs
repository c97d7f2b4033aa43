//! Request DTOs for the create and edit forms.
//!
//! Every form field arrives as `Option<String>` so that a missing field can be
//! reported by name instead of failing deserialization wholesale. `into_record`
//! checks fields in declaration order and coerces the numeric ones.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::entities::{
    AwarenessProgram, Citizen, CovidCase, Hospital, Record, TestingCenter, Vaccination,
};
use crate::errors::FormError;
use crate::ids::CitizenId;

fn required(value: Option<String>, field: &'static str) -> Result<String, FormError> {
    value.ok_or(FormError::MissingField { field })
}

fn integer(value: Option<String>, field: &'static str) -> Result<i64, FormError> {
    let raw = required(value, field)?;
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidInteger { field, value: raw })
}

/// A submitted form that validates into one record type.
pub trait RecordForm: DeserializeOwned + Send + 'static {
    type Record: Record;

    /// Validate every field and build the record.
    ///
    /// # Errors
    ///
    /// Returns `FormError` for the first missing or malformed field.
    fn into_record(self) -> Result<Self::Record, FormError>;
}

macro_rules! impl_record_form {
    ($($form:ty => $record:ty),* $(,)?) => {
        $(
            impl RecordForm for $form {
                type Record = $record;

                fn into_record(self) -> Result<$record, FormError> {
                    <$form>::into_record(self)
                }
            }
        )*
    };
}

impl_record_form!(
    CitizenForm => Citizen,
    VaccinationForm => Vaccination,
    CovidCaseForm => CovidCase,
    HospitalForm => Hospital,
    TestingCenterForm => TestingCenter,
    AwarenessProgramForm => AwarenessProgram,
);

/// Split a comma-separated participant list, trimming each entry.
#[must_use]
pub fn parse_participants(raw: &str) -> Vec<CitizenId> {
    raw.split(',')
        .map(|p| CitizenId::Text(p.trim().to_string()))
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitizenForm {
    pub citizen_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl CitizenForm {
    /// Build a new citizen; `citizen_id` must be present and integral.
    pub fn into_record(self) -> Result<Citizen, FormError> {
        let citizen_id = integer(self.citizen_id.clone(), "citizen_id")?;
        self.into_edit(citizen_id)
    }

    /// Build the edited citizen. The identifier comes from the route, so any
    /// submitted `citizen_id` field is ignored.
    pub fn into_edit(self, citizen_id: i64) -> Result<Citizen, FormError> {
        Ok(Citizen {
            citizen_id: CitizenId::Number(citizen_id),
            first_name: required(self.first_name, "first_name")?,
            last_name: required(self.last_name, "last_name")?,
            age: integer(self.age, "age")?,
            gender: required(self.gender, "gender")?,
            state: required(self.state, "state")?,
            country: required(self.country, "country")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VaccinationForm {
    pub citizen_id: Option<String>,
    pub vaccine_type: Option<String>,
    pub dose_number: Option<String>,
    pub date_administered: Option<String>,
    pub administered_by: Option<String>,
    pub location: Option<String>,
}

impl VaccinationForm {
    pub fn into_record(self) -> Result<Vaccination, FormError> {
        Ok(Vaccination {
            citizen_id: CitizenId::Text(required(self.citizen_id, "citizen_id")?),
            vaccine_type: required(self.vaccine_type, "vaccine_type")?,
            dose_number: integer(self.dose_number, "dose_number")?,
            date_administered: required(self.date_administered, "date_administered")?,
            administered_by: required(self.administered_by, "administered_by")?,
            location: required(self.location, "location")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CovidCaseForm {
    pub citizen_id: Option<String>,
    pub date_positive: Option<String>,
    pub severity: Option<String>,
    pub hospitalized: Option<String>,
    pub recovery_status: Option<String>,
    pub date_updated: Option<String>,
}

impl CovidCaseForm {
    pub fn into_record(self) -> Result<CovidCase, FormError> {
        Ok(CovidCase {
            citizen_id: CitizenId::Text(required(self.citizen_id, "citizen_id")?),
            date_positive: required(self.date_positive, "date_positive")?,
            severity: required(self.severity, "severity")?,
            hospitalized: required(self.hospitalized, "hospitalized")?,
            recovery_status: required(self.recovery_status, "recovery_status")?,
            date_updated: required(self.date_updated, "date_updated")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HospitalForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<String>,
    pub available_beds: Option<String>,
    pub contact_info: Option<String>,
}

impl HospitalForm {
    pub fn into_record(self) -> Result<Hospital, FormError> {
        Ok(Hospital {
            name: required(self.name, "name")?,
            location: required(self.location, "location")?,
            capacity: integer(self.capacity, "capacity")?,
            available_beds: integer(self.available_beds, "available_beds")?,
            contact_info: required(self.contact_info, "contact_info")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestingCenterForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub test_type: Option<String>,
    pub test_date: Option<String>,
    pub citizen_id: Option<String>,
    pub result: Option<String>,
    pub administered_by: Option<String>,
}

impl TestingCenterForm {
    pub fn into_record(self) -> Result<TestingCenter, FormError> {
        Ok(TestingCenter {
            name: required(self.name, "name")?,
            location: required(self.location, "location")?,
            test_type: required(self.test_type, "test_type")?,
            test_date: required(self.test_date, "test_date")?,
            citizen_id: CitizenId::Text(required(self.citizen_id, "citizen_id")?),
            result: required(self.result, "result")?,
            administered_by: required(self.administered_by, "administered_by")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwarenessProgramForm {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub conducted_by: Option<String>,
    /// Comma-separated citizen identifiers.
    pub participants: Option<String>,
}

impl AwarenessProgramForm {
    pub fn into_record(self) -> Result<AwarenessProgram, FormError> {
        Ok(AwarenessProgram {
            name: required(self.name, "name")?,
            date: required(self.date, "date")?,
            location: required(self.location, "location")?,
            description: required(self.description, "description")?,
            conducted_by: required(self.conducted_by, "conducted_by")?,
            participants: parse_participants(&required(self.participants, "participants")?),
        })
    }
}
