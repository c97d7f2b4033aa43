use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CitizenId;

/// A single administered vaccine dose.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Vaccination {
    pub citizen_id: CitizenId,
    pub vaccine_type: String,
    pub dose_number: i64,
    pub date_administered: String,
    pub administered_by: String,
    pub location: String,
}
