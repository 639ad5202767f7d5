//! High-level API for running the plan workflow.
//!
//! [`PlanStudio`] is the single entry point the CLI and the MCP server use.
//! It owns the workflow state machine, the draft and latest-plan stores, the
//! responder and the preview registry.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / MCP     │    │   PlanStudio    │    │  RecordStorage  │
//! │                 │───▶│ (draft_ops,     │───▶│ (SQLite or      │
//! │                 │    │  generate_ops)  │    │  in-memory)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  PlanResponder  │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`PlanStudio`] instances
//! - [`draft_ops`]: Opening the wizard, editing and clearing the draft
//! - [`generate_ops`]: Single-flight generation and the latest plan
//!
//! # Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use beaute_core::{
//!     models::CategoryId,
//!     store::MemoryStorage,
//!     PlanStudioBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let studio = PlanStudioBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .with_mock_delay(Duration::ZERO)
//!     .build()
//!     .await?;
//!
//! studio.open_wizard().await?;
//! studio.edit(|wizard| {
//!     wizard.set_monthly_budget(20000);
//!     wizard.set_category(CategoryId::Nail, true);
//! })
//! .await?;
//!
//! let plan = studio.generate().await?;
//! assert!(plan.is_some());
//! # Ok(())
//! # }
//! ```

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use crate::{
    models::PlanResult,
    responder::PlanResponder,
    store::{DraftStore, LatestPlanStore},
    workflow::{PreviewRegistry, Workflow, WorkflowStatus},
};

pub mod builder;
pub mod draft_ops;
pub mod generate_ops;

#[cfg(test)]
mod tests;

pub use builder::PlanStudioBuilder;

/// Mutable workflow state. Never locked across an `.await`.
pub(crate) struct StudioState {
    pub(crate) workflow: Workflow,
    pub(crate) last_epoch: u64,
    /// Bumped on every draft change or clear, in the order they happen
    pub(crate) draft_revision: u64,
    pub(crate) latest: Option<PlanResult>,
}

/// Main interface for one plan workflow instance.
pub struct PlanStudio {
    pub(crate) drafts: DraftStore,
    pub(crate) plans: LatestPlanStore,
    pub(crate) responder: Arc<dyn PlanResponder>,
    pub(crate) previews: PreviewRegistry,
    pub(crate) timeout: Option<Duration>,
    pub(crate) state: Arc<Mutex<StudioState>>,
    /// Highest draft revision written so far; held while writing
    pub(crate) draft_writes: Arc<Mutex<u64>>,
}

impl PlanStudio {
    pub(crate) fn new(
        drafts: DraftStore,
        plans: LatestPlanStore,
        responder: Arc<dyn PlanResponder>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            drafts,
            plans,
            responder,
            previews: PreviewRegistry::new(),
            timeout,
            state: Arc::new(Mutex::new(StudioState {
                workflow: Workflow::Idle,
                last_epoch: 0,
                draft_revision: 0,
                latest: None,
            })),
            draft_writes: Arc::new(Mutex::new(0)),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, StudioState> {
        lock_state(&self.state)
    }

    /// Current workflow status.
    pub fn status(&self) -> WorkflowStatus {
        self.lock().workflow.status()
    }

    /// Registry tracking the image previews of this studio.
    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }
}

pub(crate) fn lock_state(state: &Mutex<StudioState>) -> MutexGuard<'_, StudioState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
