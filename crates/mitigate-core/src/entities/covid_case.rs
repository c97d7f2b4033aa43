use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CitizenId;

/// Value of `CovidCase::hospitalized` for admitted patients.
pub const HOSPITALIZED_YES: &str = "Yes";

/// A confirmed COVID case and its current recovery status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CovidCase {
    pub citizen_id: CitizenId,
    pub date_positive: String,
    pub severity: String,
    /// `"Yes"` or `"No"`, kept as submitted.
    pub hospitalized: String,
    pub recovery_status: String,
    pub date_updated: String,
}

impl CovidCase {
    #[must_use]
    pub fn is_hospitalized(&self) -> bool {
        self.hospitalized == HOSPITALIZED_YES
    }
}
