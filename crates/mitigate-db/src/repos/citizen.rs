//! Citizen repository. Records are addressed by their `citizen_id` rather than
//! the store ID.

use mitigate_core::entities::{Citizen, Record, Stored};

use crate::documents::to_body;
use crate::error::DatabaseError;
use crate::service::MitigateService;

const CITIZEN_ID: &str = "citizen_id";

impl MitigateService {
    pub async fn find_citizen(
        &self,
        citizen_id: i64,
    ) -> Result<Option<Stored<Citizen>>, DatabaseError> {
        self.find_document_by(Citizen::COLLECTION, CITIZEN_ID, &citizen_id.to_string())
            .await?
            .map(|doc| doc.into_stored())
            .transpose()
    }

    /// Overwrite the first citizen with this `citizen_id`. Returns `false` when
    /// there is none.
    pub async fn update_citizen(
        &self,
        citizen_id: i64,
        citizen: &Citizen,
    ) -> Result<bool, DatabaseError> {
        self.update_document_by(
            Citizen::COLLECTION,
            CITIZEN_ID,
            &citizen_id.to_string(),
            &to_body(citizen)?,
        )
        .await
    }

    /// Delete the first citizen with this `citizen_id`. Dependent records in
    /// other collections are left in place.
    pub async fn delete_citizen(&self, citizen_id: i64) -> Result<bool, DatabaseError> {
        self.delete_document_by(Citizen::COLLECTION, CITIZEN_ID, &citizen_id.to_string())
            .await
    }

    /// All citizens ordered by `citizen_id` ascending.
    pub async fn list_citizens(&self) -> Result<Vec<Stored<Citizen>>, DatabaseError> {
        self.find_documents_sorted(Citizen::COLLECTION, CITIZEN_ID)
            .await?
            .into_iter()
            .map(|doc| doc.into_stored())
            .collect()
    }
}
