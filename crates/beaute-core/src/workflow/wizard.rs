//! The plan creation wizard: one in-progress plan request.

use super::attachment::{AttachmentSlot, ImageAttachment, ImageFile, PreviewRegistry, SlotKind};
use crate::{
    models::{CategoryId, PlanDraft},
    prompt::PlanRequest,
};

/// Collects the fields of a plan request.
///
/// The wizard only holds state; the studio stores the draft once per edit
/// that changed it. Images live only in the two attachment slots, and
/// dropping the wizard releases their previews.
pub struct PlanWizard {
    draft: PlanDraft,
    goal: AttachmentSlot,
    current: AttachmentSlot,
}

impl PlanWizard {
    pub fn new(draft: PlanDraft, previews: PreviewRegistry) -> Self {
        Self {
            draft,
            goal: AttachmentSlot::new(SlotKind::Goal, previews.clone()),
            current: AttachmentSlot::new(SlotKind::Current, previews),
        }
    }

    pub fn draft(&self) -> &PlanDraft {
        &self.draft
    }

    pub fn set_goal_text(&mut self, text: impl Into<String>) {
        self.draft.goal_text = text.into();
    }

    pub fn set_monthly_budget(&mut self, budget: u64) {
        self.draft.monthly_budget = budget;
    }

    pub fn set_category(&mut self, category: CategoryId, selected: bool) {
        self.draft.selected_categories.set(category, selected);
    }

    pub fn set_auto_crop(&mut self, enabled: bool) {
        self.draft.auto_crop_enabled = enabled;
    }

    /// Puts the draft fields back to their defaults. Attached images stay.
    pub fn reset_draft(&mut self) {
        self.draft = PlanDraft::default();
    }

    fn slot_mut(&mut self, kind: SlotKind) -> &mut AttachmentSlot {
        match kind {
            SlotKind::Goal => &mut self.goal,
            SlotKind::Current => &mut self.current,
        }
    }

    pub fn slot(&self, kind: SlotKind) -> &AttachmentSlot {
        match kind {
            SlotKind::Goal => &self.goal,
            SlotKind::Current => &self.current,
        }
    }

    /// Attaches an image, replacing (and releasing) any previous one.
    pub fn attach(&mut self, kind: SlotKind, file: ImageFile) -> &ImageAttachment {
        self.slot_mut(kind).attach(file)
    }

    /// Removes the image from a slot. Returns whether one was attached.
    pub fn detach(&mut self, kind: SlotKind) -> bool {
        self.slot_mut(kind).clear()
    }

    /// Snapshot of the request as it would be sent now.
    pub fn request(&self) -> PlanRequest {
        PlanRequest::new(
            self.draft.clone(),
            self.goal.is_attached(),
            self.current.is_attached(),
        )
    }

    /// The request description as it would be sent now.
    pub fn build_prompt(&self) -> String {
        self.request().to_string()
    }
}
