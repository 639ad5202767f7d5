//! Tests for the studio workflow.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use crate::{
    error::BeauteError,
    models::{CategoryId, PlanDraft},
    responder::{FixedSuggestion, MockResponder, ResponderError, SUGGESTIONS},
    store::{MemoryStorage, RecordStorage},
    workflow::{ImageFile, SlotKind},
};

/// Responder that blocks until the gate is opened.
struct GatedResponder {
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PlanResponder for GatedResponder {
    async fn respond(&self, prompt: &str) -> Result<String, ResponderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(format!("plan for: {}", prompt.lines().next().unwrap_or_default()))
    }
}

/// Responder that fails the first call and succeeds afterwards.
struct FlakyResponder {
    calls: AtomicUsize,
}

#[async_trait]
impl PlanResponder for FlakyResponder {
    async fn respond(&self, _prompt: &str) -> Result<String, ResponderError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(ResponderError::Unavailable("backend down".to_string()))
        } else {
            Ok("second time lucky".to_string())
        }
    }
}

/// Responder that never answers.
struct SilentResponder;

#[async_trait]
impl PlanResponder for SilentResponder {
    async fn respond(&self, _prompt: &str) -> Result<String, ResponderError> {
        std::future::pending().await
    }
}

async fn studio_with(responder: impl PlanResponder + 'static) -> PlanStudio {
    PlanStudioBuilder::new()
        .with_storage(MemoryStorage::new())
        .with_responder(responder)
        .build()
        .await
        .expect("Failed to build studio")
}

async fn instant_studio() -> PlanStudio {
    studio_with(
        MockResponder::new()
            .with_delay(Duration::ZERO)
            .with_source(FixedSuggestion(2)),
    )
    .await
}

fn gated() -> (GatedResponder, Arc<Notify>, Arc<AtomicUsize>) {
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let responder = GatedResponder {
        gate: gate.clone(),
        calls: calls.clone(),
    };
    (responder, gate, calls)
}

async fn wait_for_submitting(studio: &PlanStudio) {
    while studio.status() != WorkflowStatus::Submitting {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_generate_shows_result_and_closes_wizard() {
    let studio = instant_studio().await;
    assert_eq!(studio.status(), WorkflowStatus::Idle);

    studio.open_wizard().await.unwrap();
    studio
        .edit(|w| {
            w.set_goal_text("clear skin in 3 months");
            w.attach(SlotKind::Goal, ImageFile::new("goal.png", vec![1, 2]));
        })
        .await
        .unwrap();
    assert_eq!(studio.previews().live_count(), 1);

    let plan = studio.generate().await.unwrap().expect("plan");
    assert!(plan.text.contains(SUGGESTIONS[2]));
    assert!(plan.text.contains("Requirements: Goal: clear skin in 3 months"));

    assert_eq!(studio.status(), WorkflowStatus::ShowingResult);
    assert_eq!(studio.previews().live_count(), 0);
    assert_eq!(studio.latest_plan().await.unwrap(), Some(plan));

    assert!(studio.close_result());
    assert_eq!(studio.status(), WorkflowStatus::Idle);
    assert!(!studio.close_result());
}

#[tokio::test]
async fn test_second_trigger_while_submitting_is_refused() {
    let (responder, gate, calls) = gated();
    let studio = Arc::new(studio_with(responder).await);
    studio.open_wizard().await.unwrap();

    let background = studio.clone();
    let first = tokio::spawn(async move { background.generate().await });
    wait_for_submitting(&studio).await;

    let second = studio.generate().await;
    assert!(matches!(second, Err(BeauteError::GenerationInProgress)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    gate.notify_one();
    let plan = first.await.unwrap().unwrap().expect("plan");
    assert!(plan.text.starts_with("plan for: Goal: "));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_result_after_dismissal_is_discarded() {
    let (responder, gate, _calls) = gated();
    let studio = Arc::new(studio_with(responder).await);
    studio.open_wizard().await.unwrap();
    studio
        .edit(|w| w.attach(SlotKind::Current, ImageFile::new("now.png", vec![9])).preview().id())
        .await
        .unwrap();

    let background = studio.clone();
    let pending = tokio::spawn(async move { background.generate().await });
    wait_for_submitting(&studio).await;

    assert!(studio.dismiss_wizard());
    assert_eq!(studio.status(), WorkflowStatus::Idle);
    assert_eq!(studio.previews().live_count(), 0);

    gate.notify_one();
    assert_eq!(pending.await.unwrap().unwrap(), None);
    assert_eq!(studio.status(), WorkflowStatus::Idle);
    assert_eq!(studio.latest_plan().await.unwrap(), None);
}

#[tokio::test]
async fn test_stale_result_does_not_touch_reopened_wizard() {
    let (responder, gate, calls) = gated();
    let studio = Arc::new(studio_with(responder).await);
    studio.open_wizard().await.unwrap();

    let background = studio.clone();
    let stale = tokio::spawn(async move { background.generate().await });
    wait_for_submitting(&studio).await;
    studio.dismiss_wizard();

    studio.open_wizard().await.unwrap();
    gate.notify_one();
    assert_eq!(stale.await.unwrap().unwrap(), None);
    assert_eq!(studio.status(), WorkflowStatus::Composing);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_responder_failure_returns_to_composing() {
    let studio = studio_with(FlakyResponder {
        calls: AtomicUsize::new(0),
    })
    .await;
    studio.open_wizard().await.unwrap();
    studio.edit(|w| w.set_monthly_budget(8000)).await.unwrap();

    let err = studio.generate().await.unwrap_err();
    assert!(matches!(err, BeauteError::Responder(ResponderError::Unavailable(_))));
    assert_eq!(studio.status(), WorkflowStatus::Composing);
    assert_eq!(studio.inspect(|w| w.draft().monthly_budget).unwrap(), 8000);

    let plan = studio.generate().await.unwrap().expect("plan");
    assert_eq!(plan.text, "second time lucky");
}

#[tokio::test]
async fn test_timeout_returns_to_composing() {
    let studio = PlanStudioBuilder::new()
        .with_storage(MemoryStorage::new())
        .with_responder(SilentResponder)
        .with_timeout(Some(Duration::from_millis(20)))
        .build()
        .await
        .unwrap();
    studio.open_wizard().await.unwrap();

    let err = studio.generate().await.unwrap_err();
    assert!(matches!(err, BeauteError::ResponderTimeout(_)));
    assert_eq!(studio.status(), WorkflowStatus::Composing);
}

#[tokio::test]
async fn test_dropped_generation_returns_to_composing() {
    let studio = PlanStudioBuilder::new()
        .with_storage(MemoryStorage::new())
        .with_responder(SilentResponder)
        .with_timeout(None)
        .build()
        .await
        .unwrap();
    studio.open_wizard().await.unwrap();

    let abandoned = tokio::time::timeout(Duration::from_millis(20), studio.generate()).await;
    assert!(abandoned.is_err());
    assert_eq!(studio.status(), WorkflowStatus::Composing);
}

#[tokio::test]
async fn test_operations_need_an_open_wizard() {
    let studio = instant_studio().await;
    assert!(matches!(studio.generate().await, Err(BeauteError::WizardClosed)));
    assert!(matches!(
        studio.edit(|w| w.set_auto_crop(false)).await,
        Err(BeauteError::WizardClosed)
    ));
    assert!(matches!(studio.prompt(), Err(BeauteError::WizardClosed)));
    assert!(!studio.dismiss_wizard());
}

#[tokio::test]
async fn test_reopening_keeps_the_open_wizard() {
    let studio = instant_studio().await;
    studio.open_wizard().await.unwrap();
    studio
        .edit(|w| w.attach(SlotKind::Goal, ImageFile::new("goal.png", vec![1])).preview().id())
        .await
        .unwrap();

    assert_eq!(studio.open_wizard().await.unwrap(), WorkflowStatus::Composing);
    assert!(studio.prompt().unwrap().contains("Goal image attached: yes"));
}

#[tokio::test]
async fn test_edits_persist_and_clear_draft_resets() {
    let studio = instant_studio().await;
    studio.open_wizard().await.unwrap();
    studio
        .edit(|w| {
            w.set_category(CategoryId::Hair, false);
            w.set_category(CategoryId::Relax, true);
        })
        .await
        .unwrap();

    let stored = studio.load_draft().await.unwrap();
    assert_eq!(
        stored.selected_categories.iter().collect::<Vec<_>>(),
        vec![CategoryId::Relax, CategoryId::Esthe]
    );

    assert!(studio.clear_draft().await.unwrap().is_stored());
    assert_eq!(studio.load_draft().await.unwrap(), PlanDraft::default());
}

#[tokio::test]
async fn test_update_draft_opens_wizard_and_reports_changes() {
    let studio = instant_studio().await;
    let params = crate::params::UpdateDraft {
        monthly_budget: Some(20000),
        select: vec!["nail".to_string()],
        ..Default::default()
    };

    let result = studio.update_draft(&params).await.unwrap();
    assert_eq!(studio.status(), WorkflowStatus::Composing);
    assert!(result.stored);
    assert_eq!(result.changes.len(), 2);
    assert_eq!(result.resource.monthly_budget, 20000);
    assert_eq!(studio.load_draft().await.unwrap(), result.resource);
}

#[tokio::test]
async fn test_invalid_update_changes_nothing() {
    let studio = instant_studio().await;
    let params = crate::params::UpdateDraft {
        monthly_budget: Some(1),
        select: vec!["spa".to_string()],
        ..Default::default()
    };

    let err = studio.update_draft(&params).await.unwrap_err();
    assert!(matches!(err, BeauteError::InvalidInput { .. }));
    assert_eq!(studio.load_draft().await.unwrap(), PlanDraft::default());
}

#[tokio::test]
async fn test_attach_images_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let goal = dir.path().join("goal.png");
    std::fs::write(&goal, [0x89, b'P', b'N', b'G']).unwrap();

    let studio = instant_studio().await;
    studio.open_wizard().await.unwrap();
    let images = crate::params::PlanImages {
        goal_image: Some(goal.display().to_string()),
        current_image: None,
    };
    assert_eq!(studio.attach_images(&images).await.unwrap(), 1);
    assert_eq!(studio.previews().live_count(), 1);
    assert!(studio.prompt().unwrap().contains("Goal image attached: yes"));

    let missing = crate::params::PlanImages {
        goal_image: None,
        current_image: Some(dir.path().join("nope.png").display().to_string()),
    };
    let err = studio.attach_images(&missing).await.unwrap_err();
    assert!(matches!(err, BeauteError::FileSystem { .. }));
    assert!(studio.prompt().unwrap().contains("Current image attached: no"));
}

/// Memory storage that counts the writes it receives.
#[derive(Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: AtomicUsize,
}

impl RecordStorage for CountingStorage {
    fn read(&self, key: &str) -> crate::error::Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, body: &str) -> crate::error::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, body)
    }

    fn remove(&self, key: &str) -> crate::error::Result<()> {
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn test_update_draft_stores_the_draft_once() {
    let storage = Arc::new(CountingStorage::default());
    let studio = PlanStudioBuilder::new()
        .with_storage(storage.clone())
        .with_mock_delay(Duration::ZERO)
        .build()
        .await
        .unwrap();

    let params = crate::params::UpdateDraft {
        goal_text: Some("glow".to_string()),
        monthly_budget: Some(20000),
        select: vec!["nail".to_string(), "clinic".to_string()],
        auto_crop: Some(false),
        ..Default::default()
    };
    let result = studio.update_draft(&params).await.unwrap();
    assert_eq!(result.changes.len(), 5);
    assert_eq!(storage.writes.load(Ordering::SeqCst), 1);

    // Repeating the same values changes nothing and writes nothing.
    studio.update_draft(&params).await.unwrap();
    assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    assert_eq!(studio.load_draft().await.unwrap(), result.resource);
}

#[tokio::test]
async fn test_concurrent_edits_store_the_last_revision() {
    let studio = Arc::new(instant_studio().await);
    studio.open_wizard().await.unwrap();

    let tasks: Vec<_> = (1..=20u64)
        .map(|budget| {
            let studio = studio.clone();
            tokio::spawn(async move { studio.edit(move |w| w.set_monthly_budget(budget)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let on_screen = studio.inspect(|w| w.draft().clone()).unwrap();
    assert_eq!(studio.load_draft().await.unwrap(), on_screen);
}

#[tokio::test]
async fn test_clear_draft_resets_the_open_wizard() {
    let studio = instant_studio().await;
    let budget = crate::params::UpdateDraft {
        monthly_budget: Some(20000),
        ..Default::default()
    };
    studio.update_draft(&budget).await.unwrap();

    studio.clear_draft().await.unwrap();
    assert!(studio.prompt().unwrap().contains("Budget: 50000 JPY/month"));

    // A later unrelated edit must not bring the cleared budget back.
    let auto_crop = crate::params::UpdateDraft {
        auto_crop: Some(false),
        ..Default::default()
    };
    let result = studio.update_draft(&auto_crop).await.unwrap();
    assert_eq!(result.resource.monthly_budget, 50000);
    assert_eq!(studio.load_draft().await.unwrap().monthly_budget, 50000);
}

#[tokio::test]
async fn test_replace_images_keeps_only_the_given_ones() {
    let dir = tempfile::tempdir().unwrap();
    let goal = dir.path().join("goal.png");
    let current = dir.path().join("now.png");
    std::fs::write(&goal, [1]).unwrap();
    std::fs::write(&current, [2]).unwrap();

    let studio = instant_studio().await;
    studio.open_wizard().await.unwrap();
    let both = crate::params::PlanImages {
        goal_image: Some(goal.display().to_string()),
        current_image: Some(current.display().to_string()),
    };
    assert_eq!(studio.replace_images(&both).await.unwrap(), 2);
    assert_eq!(studio.previews().live_count(), 2);

    let only_current = crate::params::PlanImages {
        goal_image: None,
        current_image: Some(current.display().to_string()),
    };
    assert_eq!(studio.replace_images(&only_current).await.unwrap(), 1);
    let prompt = studio.prompt().unwrap();
    assert!(prompt.contains("Goal image attached: no"));
    assert!(prompt.contains("Current image attached: yes"));

    studio
        .replace_images(&crate::params::PlanImages::default())
        .await
        .unwrap();
    assert_eq!(studio.previews().live_count(), 0);
    assert_eq!(studio.previews().overlap_count(), 0);
}
