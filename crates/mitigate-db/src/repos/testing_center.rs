//! Testing center repository.

use mitigate_core::entities::{Record, TestingCenter};

use crate::error::DatabaseError;
use crate::service::MitigateService;

impl MitigateService {
    /// Test records whose `result` equals `result` exactly.
    pub async fn load_test_results(
        &self,
        result: &str,
    ) -> Result<Vec<TestingCenter>, DatabaseError> {
        self.find_documents_by(TestingCenter::COLLECTION, "result", result)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect()
    }
}
