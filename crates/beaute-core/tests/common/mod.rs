use std::{path::PathBuf, time::Duration};

use beaute_core::{
    responder::{FixedSuggestion, MockResponder},
    PlanStudio, PlanStudioBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test studio backed by a SQLite file.
pub async fn create_test_studio() -> (TempDir, PlanStudio) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let studio = open_studio(temp_dir.path().join("test.db")).await;
    (temp_dir, studio)
}

/// Opens another studio on an existing database file.
pub async fn open_studio(db_path: PathBuf) -> PlanStudio {
    PlanStudioBuilder::new()
        .with_database_path(Some(&db_path))
        .with_responder(
            MockResponder::new()
                .with_delay(Duration::ZERO)
                .with_source(FixedSuggestion(0)),
        )
        .build()
        .await
        .expect("Failed to create studio")
}
