//! Generic record repository: CRUD for any collection addressed by store ID.

use mitigate_core::entities::{Record, Stored};

use crate::documents::to_body;
use crate::error::DatabaseError;
use crate::service::MitigateService;

impl MitigateService {
    pub async fn create_record<R: Record>(&self, record: &R) -> Result<Stored<R>, DatabaseError> {
        let id = self.insert_document(R::COLLECTION, &to_body(record)?).await?;
        Ok(Stored::new(id, record.clone()))
    }

    pub async fn find_record<R: Record>(
        &self,
        id: &str,
    ) -> Result<Option<Stored<R>>, DatabaseError> {
        self.find_document(R::COLLECTION, id)
            .await?
            .map(|doc| doc.into_stored())
            .transpose()
    }

    /// Overwrite every field of the record stored under `id`.
    ///
    /// Returns `false` when no such record exists.
    pub async fn update_record<R: Record>(
        &self,
        id: &str,
        record: &R,
    ) -> Result<bool, DatabaseError> {
        let updated = self
            .update_document(R::COLLECTION, id, &to_body(record)?)
            .await?;
        if !updated {
            let collection = R::COLLECTION;
            tracing::debug!(%collection, %id, "update matched no record");
        }
        Ok(updated)
    }

    /// Returns `false` when no such record exists.
    pub async fn delete_record<R: Record>(&self, id: &str) -> Result<bool, DatabaseError> {
        let deleted = self.delete_document(R::COLLECTION, id).await?;
        if !deleted {
            let collection = R::COLLECTION;
            tracing::debug!(%collection, %id, "delete matched no record");
        }
        Ok(deleted)
    }

    /// Every record of the collection, in insertion order.
    pub async fn list_records<R: Record>(&self) -> Result<Vec<Stored<R>>, DatabaseError> {
        self.find_documents(R::COLLECTION)
            .await?
            .into_iter()
            .map(|doc| doc.into_stored())
            .collect()
    }

    /// Every record body of the collection, without store IDs.
    ///
    /// This is what the insight queries consume.
    pub async fn load_records<R: Record>(&self) -> Result<Vec<R>, DatabaseError> {
        let records: Vec<R> = self
            .find_documents(R::COLLECTION)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect::<Result<_, _>>()?;
        let collection = R::COLLECTION;
        tracing::debug!(%collection, count = records.len(), "loaded records");
        Ok(records)
    }
}
