//! Grouped counts for the dashboard charts, computed store-side.

use mitigate_core::enums::Collection;
use mitigate_core::reports::{CategoryCount, DoseCount};

use crate::documents::GroupCount;
use crate::error::DatabaseError;
use crate::helpers::json_label;
use crate::service::MitigateService;

fn single_key(groups: Vec<GroupCount>) -> Vec<CategoryCount> {
    groups
        .into_iter()
        .filter_map(|g| match g.keys.as_slice() {
            [label] => Some(CategoryCount::new(json_label(label), g.count)),
            _ => None,
        })
        .collect()
}

impl MitigateService {
    /// Vaccinations counted per `vaccine_type`.
    pub async fn count_vaccinations_by_type(&self) -> Result<Vec<CategoryCount>, DatabaseError> {
        let groups = self
            .group_count(Collection::Vaccinations, &["vaccine_type"])
            .await?;
        Ok(single_key(groups))
    }

    /// Citizens counted per `state`.
    pub async fn count_citizens_by_state(&self) -> Result<Vec<CategoryCount>, DatabaseError> {
        let groups = self.group_count(Collection::Citizens, &["state"]).await?;
        Ok(single_key(groups))
    }

    /// Vaccinations counted per (`dose_number`, `vaccine_type`) pair.
    pub async fn count_vaccinations_by_dose_and_type(
        &self,
    ) -> Result<Vec<DoseCount>, DatabaseError> {
        let groups = self
            .group_count(Collection::Vaccinations, &["dose_number", "vaccine_type"])
            .await?;
        Ok(groups
            .into_iter()
            .filter_map(|g| match g.keys.as_slice() {
                [dose, vaccine_type] => Some(DoseCount::new(
                    json_label(dose),
                    json_label(vaccine_type),
                    g.count,
                )),
                _ => None,
            })
            .collect())
    }
}
