use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CitizenId;

pub const RESULT_POSITIVE: &str = "Positive";
pub const RESULT_NEGATIVE: &str = "Negative";

/// A test administered to a citizen at a testing center.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TestingCenter {
    pub name: String,
    pub location: String,
    pub test_type: String,
    pub test_date: String,
    pub citizen_id: CitizenId,
    /// `"Positive"` or `"Negative"`, matched case-sensitively.
    pub result: String,
    pub administered_by: String,
}

impl TestingCenter {
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.result == RESULT_POSITIVE
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.result == RESULT_NEGATIVE
    }
}
