//! Citizen lookup and membership sets.
//!
//! Both are keyed by the normalized string form of the citizen identifier, so
//! a citizen stored as `7` is found from a reference stored as `"7"`.

use std::collections::{BTreeSet, HashMap, HashSet};

use mitigate_core::entities::{Citizen, CovidCase, TestingCenter, Vaccination};
use mitigate_core::ids::CitizenId;

/// Citizens keyed by identifier. A later duplicate replaces an earlier one.
#[derive(Debug, Default)]
pub struct CitizenIndex<'a> {
    by_key: HashMap<String, &'a Citizen>,
}

impl<'a> CitizenIndex<'a> {
    #[must_use]
    pub fn new(citizens: &'a [Citizen]) -> Self {
        let by_key = citizens.iter().map(|c| (c.citizen_id.key(), c)).collect();
        Self { by_key }
    }

    #[must_use]
    pub fn get(&self, id: &CitizenId) -> Option<&'a Citizen> {
        self.by_key.get(&id.key()).copied()
    }

    /// Sorted distinct states of the indexed citizens.
    #[must_use]
    pub fn states(&self) -> Vec<String> {
        self.by_key
            .values()
            .map(|c| c.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Citizen identifiers satisfying one predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSet(HashSet<String>);

impl MembershipSet {
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a CitizenId>) -> Self {
        Self(ids.into_iter().map(CitizenId::key).collect())
    }

    #[must_use]
    pub fn contains(&self, id: &CitizenId) -> bool {
        self.0.contains(&id.key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everyone with at least one recorded vaccination.
#[must_use]
pub fn vaccinated(vaccinations: &[Vaccination]) -> MembershipSet {
    MembershipSet::from_ids(vaccinations.iter().map(|v| &v.citizen_id))
}

/// Everyone with at least one negative test.
#[must_use]
pub fn tested_negative(tests: &[TestingCenter]) -> MembershipSet {
    MembershipSet::from_ids(
        tests
            .iter()
            .filter(|t| t.is_negative())
            .map(|t| &t.citizen_id),
    )
}

/// Everyone with a case flagged as hospitalized.
#[must_use]
pub fn hospitalized(cases: &[CovidCase]) -> MembershipSet {
    MembershipSet::from_ids(
        cases
            .iter()
            .filter(|c| c.is_hospitalized())
            .map(|c| &c.citizen_id),
    )
}

/// Sorted distinct vaccine types across all vaccinations.
#[must_use]
pub fn vaccine_options(vaccinations: &[Vaccination]) -> Vec<String> {
    vaccinations
        .iter()
        .map(|v| v.vaccine_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Treat an empty filter value (`?state=`) the same as no filter.
#[must_use]
pub fn active_filter(selected: Option<&str>) -> Option<&str> {
    selected.filter(|value| !value.is_empty())
}
