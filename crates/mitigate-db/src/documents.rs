//! Collection-level document operations.
//!
//! These are the store primitives every repository is built on: find,
//! find-one, insert-one, update-one, delete-one, and a grouped count. Field
//! filters compare the extracted value as TEXT, so a document holding
//! `citizen_id: 7` matches the filter value `"7"`.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use mitigate_core::entities::Stored;
use mitigate_core::enums::Collection;

use crate::error::DatabaseError;
use crate::helpers::{field_path, parse_document, sql_to_json};
use crate::service::MitigateService;

/// A raw JSON document and the ID it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub collection: Collection,
    pub id: String,
    pub body: Value,
}

impl Document {
    fn from_row(collection: Collection, row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            collection,
            id: row.get::<String>(0)?,
            body: parse_document(&row.get::<String>(1)?)?,
        })
    }

    /// Decode the body into a record type.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the document does not have the
    /// shape of `T`.
    pub fn into_record<T: DeserializeOwned>(self) -> Result<T, DatabaseError> {
        serde_json::from_value(self.body).map_err(|e| {
            DatabaseError::InvalidState(format!(
                "{} document {} does not match its record type: {e}",
                self.collection, self.id
            ))
        })
    }

    /// Decode the body and keep the store ID alongside it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the document does not have the
    /// shape of `T`.
    pub fn into_stored<T: DeserializeOwned>(self) -> Result<Stored<T>, DatabaseError> {
        let id = self.id.clone();
        Ok(Stored::new(id, self.into_record()?))
    }
}

/// Number of documents sharing one combination of grouping keys.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    /// Extracted values, one per grouping field, in field order.
    pub keys: Vec<Value>,
    pub count: u64,
}

/// Encode a record as a JSON object body.
///
/// # Errors
///
/// Returns `DatabaseError` if the record does not serialize to an object.
pub fn to_body<T: Serialize>(record: &T) -> Result<Value, DatabaseError> {
    let body = serde_json::to_value(record)?;
    if body.is_object() {
        Ok(body)
    } else {
        Err(DatabaseError::InvalidState(
            "records must serialize to JSON objects".into(),
        ))
    }
}

async fn collect_documents(
    collection: Collection,
    mut rows: libsql::Rows,
) -> Result<Vec<Document>, DatabaseError> {
    let mut documents = Vec::new();
    while let Some(row) = rows.next().await? {
        documents.push(Document::from_row(collection, &row)?);
    }
    Ok(documents)
}

impl MitigateService {
    /// Insert a document and return its generated ID.
    pub async fn insert_document(
        &self,
        collection: Collection,
        body: &Value,
    ) -> Result<String, DatabaseError> {
        if !body.is_object() {
            return Err(DatabaseError::InvalidState(format!(
                "cannot insert non-object document into {collection}"
            )));
        }

        let now = Utc::now().to_rfc3339();
        let id = self.db().generate_id(collection.id_prefix()).await?;
        let sql = format!(
            "INSERT INTO {} (id, doc, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            collection.as_str()
        );
        self.db()
            .conn()
            .execute(
                &sql,
                libsql::params![id.as_str(), body.to_string(), now.as_str(), now.as_str()],
            )
            .await?;

        tracing::debug!(%collection, %id, "inserted document");
        Ok(id)
    }

    /// All documents of a collection in insertion order.
    pub async fn find_documents(
        &self,
        collection: Collection,
    ) -> Result<Vec<Document>, DatabaseError> {
        let sql = format!("SELECT id, doc FROM {} ORDER BY rowid", collection.as_str());
        let rows = self.db().conn().query(&sql, ()).await?;
        collect_documents(collection, rows).await
    }

    /// All documents ordered by one field ascending.
    ///
    /// Integers sort before strings, matching the store's type ordering.
    pub async fn find_documents_sorted(
        &self,
        collection: Collection,
        field: &str,
    ) -> Result<Vec<Document>, DatabaseError> {
        let sql = format!(
            "SELECT id, doc FROM {} ORDER BY json_extract(doc, ?1), rowid",
            collection.as_str()
        );
        let rows = self.db().conn().query(&sql, [field_path(field)]).await?;
        collect_documents(collection, rows).await
    }

    /// Documents whose `field` equals `value` when both are compared as text.
    pub async fn find_documents_by(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, DatabaseError> {
        let sql = format!(
            "SELECT id, doc FROM {} WHERE CAST(json_extract(doc, ?1) AS TEXT) = ?2 ORDER BY rowid",
            collection.as_str()
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![field_path(field), value])
            .await?;
        collect_documents(collection, rows).await
    }

    /// The document stored under `id`, if any.
    pub async fn find_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, DatabaseError> {
        let sql = format!("SELECT id, doc FROM {} WHERE id = ?1", collection.as_str());
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Document::from_row(collection, &row)?)),
            None => Ok(None),
        }
    }

    /// The first document (in insertion order) whose `field` equals `value`.
    pub async fn find_document_by(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, DatabaseError> {
        Ok(self
            .find_documents_by(collection, field, value)
            .await?
            .into_iter()
            .next())
    }

    /// Merge `set` into the document stored under `id`.
    ///
    /// Fields present in `set` overwrite the stored ones; other fields are
    /// kept. Returns whether a document was updated.
    pub async fn update_document(
        &self,
        collection: Collection,
        id: &str,
        set: &Value,
    ) -> Result<bool, DatabaseError> {
        let sql = format!(
            "UPDATE {} SET doc = json_patch(doc, ?1), updated_at = ?2 WHERE id = ?3",
            collection.as_str()
        );
        let changed = self
            .db()
            .conn()
            .execute(
                &sql,
                libsql::params![set.to_string(), Utc::now().to_rfc3339(), id],
            )
            .await?;
        Ok(changed > 0)
    }

    /// Merge `set` into the first document whose `field` equals `value`.
    pub async fn update_document_by(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
        set: &Value,
    ) -> Result<bool, DatabaseError> {
        match self.find_document_by(collection, field, value).await? {
            Some(doc) => self.update_document(collection, &doc.id, set).await,
            None => Ok(false),
        }
    }

    /// Delete the document stored under `id`. Deleting a missing ID is a
    /// no-op that returns `false`.
    pub async fn delete_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", collection.as_str());
        let changed = self.db().conn().execute(&sql, [id]).await?;
        Ok(changed > 0)
    }

    /// Delete the first document whose `field` equals `value`.
    pub async fn delete_document_by(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<bool, DatabaseError> {
        match self.find_document_by(collection, field, value).await? {
            Some(doc) => self.delete_document(collection, &doc.id).await,
            None => Ok(false),
        }
    }

    /// Number of documents in a collection.
    pub async fn count_documents(&self, collection: Collection) -> Result<u64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", collection.as_str());
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(u64::try_from(row.get::<i64>(0)?).unwrap_or_default())
    }

    /// Count documents grouped by the values of one or more fields.
    ///
    /// Groups are returned ordered by their keys. A document missing a field
    /// contributes a `null` key for it.
    pub async fn group_count(
        &self,
        collection: Collection,
        fields: &[&str],
    ) -> Result<Vec<GroupCount>, DatabaseError> {
        if fields.is_empty() {
            return Err(DatabaseError::Query(
                "group_count needs at least one field".into(),
            ));
        }

        let select: Vec<String> = (0..fields.len())
            .map(|i| format!("json_extract(doc, ?{}) AS k{i}", i + 1))
            .collect();
        let keys: Vec<String> = (0..fields.len()).map(|i| format!("k{i}")).collect();
        let sql = format!(
            "SELECT {}, COUNT(*) FROM {} GROUP BY {keys} ORDER BY {keys}",
            select.join(", "),
            collection.as_str(),
            keys = keys.join(", ")
        );
        let params: Vec<libsql::Value> = fields.iter().map(|f| field_path(f).into()).collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let width = i32::try_from(fields.len())
            .map_err(|_| DatabaseError::Query("too many grouping fields".into()))?;
        let mut groups = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut keys = Vec::with_capacity(fields.len());
            for idx in 0..width {
                keys.push(sql_to_json(row.get_value(idx)?)?);
            }
            let count = u64::try_from(row.get::<i64>(width)?).unwrap_or_default();
            groups.push(GroupCount { keys, count });
        }
        Ok(groups)
    }
}
