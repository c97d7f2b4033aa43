//! The four correlation queries.
//!
//! Each takes the collections it joins as slices plus the optional dimension
//! filter, and returns an [`InsightTable`](crate::InsightTable). Citizens
//! referenced by a driving record but missing from Citizens are skipped.

mod hospital_positive_cases;
mod positive_hospitalized_vaccine;
mod vaccinated_tested_awareness;
mod vaccinated_then_positive;

pub use hospital_positive_cases::{HospitalAssignmentRow, hospital_positive_cases};
pub use positive_hospitalized_vaccine::{HospitalizedVaccineRow, positive_hospitalized_vaccine};
pub use vaccinated_tested_awareness::{AwarenessRow, vaccinated_tested_awareness};
pub use vaccinated_then_positive::{PositiveAfterVaccineRow, vaccinated_then_positive};

use crate::table::DimensionFilter;

/// Literal cell values shared by several queries.
pub const STATUS_VACCINATED: &str = "Vaccinated";

fn state_filter(options: Vec<String>, selected: Option<&str>) -> DimensionFilter {
    DimensionFilter {
        name: "state",
        options,
        selected: selected.map(str::to_string),
    }
}

fn matches_filter(value: &str, selected: Option<&str>) -> bool {
    selected.is_none_or(|wanted| wanted == value)
}
