use beaute_core::{store::DRAFT_KEY, Database};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.get_record(DRAFT_KEY).unwrap(), None);
}

#[test]
fn test_put_and_get_record() {
    let (_temp_file, mut db) = create_test_db();

    db.put_record(DRAFT_KEY, r#"{"monthlyBudget":1}"#)
        .expect("Failed to put record");
    assert_eq!(
        db.get_record(DRAFT_KEY).unwrap().as_deref(),
        Some(r#"{"monthlyBudget":1}"#)
    );
}

#[test]
fn test_put_overwrites() {
    let (_temp_file, mut db) = create_test_db();

    db.put_record("k", "first").unwrap();
    db.put_record("k", "second").unwrap();
    assert_eq!(db.get_record("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn test_records_survive_reopen() {
    let (temp_file, mut db) = create_test_db();
    db.put_record("k", "kept").unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    assert_eq!(reopened.get_record("k").unwrap().as_deref(), Some("kept"));
}

#[test]
fn test_delete_record() {
    let (_temp_file, mut db) = create_test_db();

    db.put_record("k", "gone soon").unwrap();
    assert!(db.delete_record("k").unwrap());
    assert!(!db.delete_record("k").unwrap());
    assert_eq!(db.get_record("k").unwrap(), None);
}

#[test]
fn test_open_in_missing_directory_fails() {
    let result = Database::new("/definitely/not/here/beaute.db");
    assert!(result.is_err());
}
