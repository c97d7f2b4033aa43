//! Service layer owning the store handle.
//!
//! `MitigateService` wraps `MitigateDb`. Collection-level operations live in
//! `documents`, typed record repositories in `repos`, and the startup
//! normalization task in `normalize`; all are `impl MitigateService` blocks.

use crate::MitigateDb;
use crate::error::DatabaseError;

/// Store connection shared by every request handler for the life of the
/// process.
pub struct MitigateService {
    db: MitigateDb,
}

impl MitigateService {
    /// Open (or create) a local store.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MitigateDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MitigateDb`.
    #[must_use]
    pub const fn from_db(db: MitigateDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MitigateDb {
        &self.db
    }
}
