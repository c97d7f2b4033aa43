//! COVID case repository.

use mitigate_core::entities::{CovidCase, HOSPITALIZED_YES, Record};

use crate::error::DatabaseError;
use crate::service::MitigateService;

impl MitigateService {
    /// Cases whose `hospitalized` flag is exactly `"Yes"`.
    pub async fn load_hospitalized_cases(&self) -> Result<Vec<CovidCase>, DatabaseError> {
        self.find_documents_by(CovidCase::COLLECTION, "hospitalized", HOSPITALIZED_YES)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect()
    }
}
