//! Tests for the draft and latest-plan stores.

use std::sync::Arc;

use tempfile::TempDir;

use super::*;
use crate::{
    error::BeauteError,
    models::{CategoryId, CategorySet},
};

/// Storage that fails every operation, like a disabled or full medium.
struct UnavailableStorage;

impl RecordStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(BeauteError::Configuration {
            message: "storage disabled".to_string(),
        })
    }

    fn write(&self, _key: &str, _body: &str) -> Result<()> {
        Err(BeauteError::Configuration {
            message: "quota exceeded".to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(BeauteError::Configuration {
            message: "storage disabled".to_string(),
        })
    }
}

fn sample_drafts() -> Vec<PlanDraft> {
    vec![
        PlanDraft::default(),
        PlanDraft {
            goal_text: "clear skin in 3 months".to_string(),
            monthly_budget: 20000,
            selected_categories: [CategoryId::Esthe].into_iter().collect(),
            auto_crop_enabled: false,
        },
        PlanDraft {
            goal_text: String::new(),
            monthly_budget: 0,
            selected_categories: CategorySet::new(),
            auto_crop_enabled: true,
        },
        PlanDraft {
            goal_text: "Glossy hair, \"quoted\" and\nmultiline ✨".to_string(),
            monthly_budget: u64::MAX,
            selected_categories: CategoryId::ALL.into_iter().collect(),
            auto_crop_enabled: false,
        },
    ]
}

#[test]
fn test_round_trip_in_memory() {
    let store = DraftStore::new(Arc::new(MemoryStorage::new()));
    for draft in sample_drafts() {
        assert!(store.save(&draft).is_stored());
        assert_eq!(store.load(), draft);
    }
}

#[test]
fn test_round_trip_sqlite() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SqliteStorage::new(temp_dir.path().join("drafts.db"));
    let store = DraftStore::new(Arc::new(storage));
    for draft in sample_drafts() {
        assert!(store.save(&draft).is_stored());
        assert_eq!(store.load(), draft);
    }
}

#[test]
fn test_load_without_save_is_default() {
    let store = DraftStore::new(Arc::new(MemoryStorage::new()));
    assert_eq!(store.load(), PlanDraft::default());
}

#[test]
fn test_clear_reverts_to_default() {
    let store = DraftStore::new(Arc::new(MemoryStorage::new()));
    store.save(&sample_drafts()[1]);
    assert!(store.clear().is_stored());
    assert_eq!(store.load(), PlanDraft::default());

    // Clearing twice is harmless.
    assert!(store.clear().is_stored());
}

#[test]
fn test_malformed_record_is_default() {
    let storage = Arc::new(MemoryStorage::new());
    let store = DraftStore::new(storage.clone());

    for body in [
        r#"{"goalText": "trunc"#,
        "not json at all",
        r#"{"monthlyBudget": -1}"#,
        r#"{"autoCropEnabled": "yes"}"#,
        "null",
        "",
    ] {
        storage.write(DRAFT_KEY, body).unwrap();
        assert_eq!(store.load(), PlanDraft::default(), "body: {body}");
    }
}

#[test]
fn test_unavailable_storage_degrades() {
    let store = DraftStore::new(Arc::new(UnavailableStorage));
    assert_eq!(store.save(&sample_drafts()[1]), Persistence::Degraded);
    assert_eq!(store.clear(), Persistence::Degraded);
    assert_eq!(store.load(), PlanDraft::default());
}

#[test]
fn test_volatile_storage_reports_in_memory() {
    let store = DraftStore::new(Arc::new(MemoryStorage::volatile()));
    let draft = sample_drafts()[1].clone();

    let outcome = store.save(&draft);
    assert_eq!(outcome, Persistence::InMemory);
    assert!(!outcome.is_stored());
    assert_eq!(store.load(), draft);
    assert_eq!(store.clear(), Persistence::InMemory);
}

#[test]
fn test_latest_plan_round_trip() {
    let storage = Arc::new(MemoryStorage::new());
    let store = LatestPlanStore::new(storage.clone());
    assert_eq!(store.load(), None);

    let first = PlanResult::new("first");
    let second = PlanResult::new("second");
    store.save(&first);
    store.save(&second);
    assert_eq!(store.load(), Some(second));

    storage.write(LATEST_PLAN_KEY, "{").unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn test_draft_and_latest_plan_are_separate_records() {
    let storage: Arc<dyn RecordStorage> = Arc::new(MemoryStorage::new());
    let drafts = DraftStore::new(storage.clone());
    let plans = LatestPlanStore::new(storage);

    plans.save(&PlanResult::new("kept"));
    drafts.save(&sample_drafts()[1]);
    drafts.clear();

    assert_eq!(plans.load().map(|p| p.text), Some("kept".to_string()));
}
