//! Record reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_RECORD_SQL: &str = "SELECT body FROM records WHERE key = ?1";
const UPSERT_RECORD_SQL: &str = "INSERT INTO records (key, body, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at";
const DELETE_RECORD_SQL: &str = "DELETE FROM records WHERE key = ?1";

impl super::Database {
    /// Returns the body stored under `key`, if any.
    pub fn get_record(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_RECORD_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query record")
    }

    /// Stores `body` under `key`, replacing any previous body.
    pub fn put_record(&mut self, key: &str, body: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_RECORD_SQL,
            params![key, body, Timestamp::now().to_string()],
        )
        .db_context("Failed to write record")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Removes the record under `key`. Returns whether a record existed.
    pub fn delete_record(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_RECORD_SQL, params![key])
            .db_context("Failed to delete record")?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::super::Database;

    fn open_test_db() -> (TempDir, Database) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
        (temp_dir, db)
    }

    #[test]
    fn test_missing_record() {
        let (_temp_dir, db) = open_test_db();
        assert_eq!(db.get_record("nothing").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let (_temp_dir, mut db) = open_test_db();
        db.put_record("k", "first").unwrap();
        db.put_record("k", "second").unwrap();
        assert_eq!(db.get_record("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_delete_record() {
        let (_temp_dir, mut db) = open_test_db();
        db.put_record("k", "body").unwrap();
        assert!(db.delete_record("k").unwrap());
        assert!(!db.delete_record("k").unwrap());
        assert_eq!(db.get_record("k").unwrap(), None);
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("test.db");
        Database::new(&path).unwrap().put_record("k", "kept").unwrap();
        let db = Database::new(&path).unwrap();
        assert_eq!(db.get_record("k").unwrap().as_deref(), Some("kept"));
    }
}
