//! Collection names for the Mitigate document store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{
    PREFIX_AWARENESS_PROGRAM, PREFIX_CITIZEN, PREFIX_COVID_CASE, PREFIX_HOSPITAL,
    PREFIX_TESTING_CENTER, PREFIX_VACCINATION,
};

/// A named collection in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Citizens,
    Vaccinations,
    CovidCases,
    Hospitals,
    TestingCenters,
    AwarenessPrograms,
}

impl Collection {
    pub const ALL: [Self; 6] = [
        Self::Citizens,
        Self::Vaccinations,
        Self::CovidCases,
        Self::Hospitals,
        Self::TestingCenters,
        Self::AwarenessPrograms,
    ];

    /// SQL table backing the collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizens => "citizens",
            Self::Vaccinations => "vaccinations",
            Self::CovidCases => "covid_cases",
            Self::Hospitals => "hospitals",
            Self::TestingCenters => "testing_centers",
            Self::AwarenessPrograms => "awareness_programs",
        }
    }

    /// Human-facing collection name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Citizens => "Citizens",
            Self::Vaccinations => "Vaccinations",
            Self::CovidCases => "COVID_Cases",
            Self::Hospitals => "Hospitals",
            Self::TestingCenters => "Testing_Centers",
            Self::AwarenessPrograms => "Awareness_Programs",
        }
    }

    /// Singular record name, used in routes and not-found messages.
    #[must_use]
    pub const fn record_name(self) -> &'static str {
        match self {
            Self::Citizens => "citizen",
            Self::Vaccinations => "vaccination",
            Self::CovidCases => "covid_case",
            Self::Hospitals => "hospital",
            Self::TestingCenters => "testing_center",
            Self::AwarenessPrograms => "awareness_program",
        }
    }

    /// Prefix for store-generated document IDs.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Citizens => PREFIX_CITIZEN,
            Self::Vaccinations => PREFIX_VACCINATION,
            Self::CovidCases => PREFIX_COVID_CASE,
            Self::Hospitals => PREFIX_HOSPITAL,
            Self::TestingCenters => PREFIX_TESTING_CENTER,
            Self::AwarenessPrograms => PREFIX_AWARENESS_PROGRAM,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
