//! SQLite-backed record storage.

use std::path::{Path, PathBuf};

use super::RecordStorage;
use crate::{db::Database, error::Result};

/// Stores records in the `records` table of a SQLite file.
///
/// A connection is opened per operation.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl RecordStorage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Database::new(&self.db_path)?.get_record(key)
    }

    fn write(&self, key: &str, body: &str) -> Result<()> {
        Database::new(&self.db_path)?.put_record(key, body)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Database::new(&self.db_path)?.delete_record(key).map(|_| ())
    }
}
