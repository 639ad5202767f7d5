//! The plan creation workflow: wizard, image slots and the state they move
//! through.
//!
//! ```text
//! Idle ──open_wizard──▶ Composing ──generate──▶ Submitting ──response──▶ ShowingResult
//!                          ▲                        │                         │
//!                          └── failure / timeout ───┘                         │
//! Idle ◀──dismiss_wizard── Composing | Submitting (late result discarded)     │
//! Idle ◀──close_result────────────────────────────────────────────────────────┘
//! ```

pub mod attachment;
pub mod wizard;

use std::fmt;

pub use attachment::{
    AttachmentSlot, ImageAttachment, ImageFile, PreviewRef, PreviewRegistry, SlotKind,
};
pub use wizard::PlanWizard;

/// Where a plan workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    /// No wizard open and no result on display
    Idle,
    /// The wizard is open and accepting edits
    Composing,
    /// A generation call is outstanding; further triggers are refused
    Submitting,
    /// The latest plan is on display
    ShowingResult,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Idle => "idle",
            WorkflowStatus::Composing => "composing",
            WorkflowStatus::Submitting => "submitting",
            WorkflowStatus::ShowingResult => "showing result",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow state with the wizard owned by the states that have one.
pub(crate) enum Workflow {
    Idle,
    Composing(PlanWizard),
    Submitting { wizard: PlanWizard, epoch: u64 },
    ShowingResult,
}

impl Workflow {
    pub(crate) fn status(&self) -> WorkflowStatus {
        match self {
            Workflow::Idle => WorkflowStatus::Idle,
            Workflow::Composing(_) => WorkflowStatus::Composing,
            Workflow::Submitting { .. } => WorkflowStatus::Submitting,
            Workflow::ShowingResult => WorkflowStatus::ShowingResult,
        }
    }

    pub(crate) fn wizard(&self) -> Option<&PlanWizard> {
        match self {
            Workflow::Composing(wizard) | Workflow::Submitting { wizard, .. } => Some(wizard),
            Workflow::Idle | Workflow::ShowingResult => None,
        }
    }

    pub(crate) fn wizard_mut(&mut self) -> Option<&mut PlanWizard> {
        match self {
            Workflow::Composing(wizard) | Workflow::Submitting { wizard, .. } => Some(wizard),
            Workflow::Idle | Workflow::ShowingResult => None,
        }
    }
}
