//! Record structs for every Mitigate collection.
//!
//! Each struct is the JSON document body kept in the store. `Stored<T>` pairs a
//! body with its store-generated ID. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::Collection;

mod awareness_program;
mod citizen;
mod covid_case;
mod hospital;
mod stored;
mod testing_center;
mod vaccination;

pub use awareness_program::AwarenessProgram;
pub use citizen::Citizen;
pub use covid_case::{CovidCase, HOSPITALIZED_YES};
pub use hospital::Hospital;
pub use stored::Stored;
pub use testing_center::{RESULT_NEGATIVE, RESULT_POSITIVE, TestingCenter};
pub use vaccination::Vaccination;

/// A document body that belongs to exactly one collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;
}

impl Record for Citizen {
    const COLLECTION: Collection = Collection::Citizens;
}

impl Record for Vaccination {
    const COLLECTION: Collection = Collection::Vaccinations;
}

impl Record for CovidCase {
    const COLLECTION: Collection = Collection::CovidCases;
}

impl Record for Hospital {
    const COLLECTION: Collection = Collection::Hospitals;
}

impl Record for TestingCenter {
    const COLLECTION: Collection = Collection::TestingCenters;
}

impl Record for AwarenessProgram {
    const COLLECTION: Collection = Collection::AwarenessPrograms;
}
