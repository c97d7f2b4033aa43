//! # mitigate-db
//!
//! Document store for Mitigate, backed by libSQL.
//!
//! Every collection (Citizens, Vaccinations, `COVID_Cases`, Hospitals,
//! `Testing_Centers`, `Awareness_Programs`) is a table of JSON documents keyed
//! by a store-generated ID. `MitigateService` exposes the collection-level
//! operations (find, find-one, insert-one, update-one, delete-one, aggregate)
//! and typed record repositories built on top of them.

pub mod documents;
pub mod error;
pub mod helpers;
mod migrations;
pub mod normalize;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for the document store.
///
/// Wraps a libSQL database and connection and provides ID generation.
pub struct MitigateDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl MitigateDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let mitigate_db = Self { db, conn };
        mitigate_db.run_migrations().await?;
        Ok(mitigate_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"vac-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mitigate_core::enums::Collection;

    async fn test_db() -> MitigateDb {
        MitigateDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_collection_tables() {
        let db = test_db().await;

        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                (),
            )
            .await
            .unwrap();
        let mut tables = Vec::new();
        while let Some(row) = rows.next().await.unwrap() {
            tables.push(row.get::<String>(0).unwrap());
        }

        for collection in Collection::ALL {
            assert!(
                tables.iter().any(|t| t == collection.as_str()),
                "missing table {}",
                collection.as_str()
            );
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_has_prefix_and_hex_suffix() {
        let db = test_db().await;
        let id = db.generate_id("vac").await.unwrap();

        let suffix = id.strip_prefix("vac-").expect("prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn file_backed_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mitigate.db");
        let path = path.to_string_lossy();

        {
            let db = MitigateDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO hospitals (id, doc, created_at, updated_at) VALUES ('hsp-1', '{}', 'now', 'now')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = MitigateDb::open_local(&path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM hospitals", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
