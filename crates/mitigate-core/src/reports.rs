//! Grouped counts produced by the store and consumed by the dashboard charts.

use serde::{Deserialize, Serialize};

/// Number of records sharing one value of a single dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Number of vaccinations for one (dose number, vaccine type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseCount {
    /// Dose number rendered as a label.
    pub dose: String,
    pub vaccine_type: String,
    pub count: u64,
}

impl DoseCount {
    pub fn new(dose: impl Into<String>, vaccine_type: impl Into<String>, count: u64) -> Self {
        Self {
            dose: dose.into(),
            vaccine_type: vaccine_type.into(),
            count,
        }
    }
}
