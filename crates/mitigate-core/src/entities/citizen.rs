use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CitizenId;

/// A person tracked by the program, keyed by the user-supplied `citizen_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Citizen {
    pub citizen_id: CitizenId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub gender: String,
    pub state: String,
    pub country: String,
}
