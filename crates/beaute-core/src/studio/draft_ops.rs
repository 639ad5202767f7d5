//! Wizard and draft operations for the PlanStudio.

use std::sync::PoisonError;

use log::debug;
use tokio::task;

use super::{PlanStudio, StudioState};
use crate::{
    display::UpdateResult,
    error::{BeauteError, Result},
    models::PlanDraft,
    params::{DraftEdit, PlanImages, UpdateDraft},
    store::Persistence,
    workflow::{ImageFile, PlanWizard, SlotKind, Workflow, WorkflowStatus},
};

/// Reads the image files named in `images`, goal first.
async fn read_images(images: &PlanImages) -> Result<Vec<(SlotKind, ImageFile)>> {
    if images.is_empty() {
        return Ok(Vec::new());
    }

    let goal = images.goal_path();
    let current = images.current_path();
    task::spawn_blocking(move || -> Result<Vec<(SlotKind, ImageFile)>> {
        let mut files = Vec::new();
        if let Some(path) = goal {
            files.push((SlotKind::Goal, ImageFile::read(&path)?));
        }
        if let Some(path) = current {
            files.push((SlotKind::Current, ImageFile::read(&path)?));
        }
        Ok(files)
    })
    .await
    .map_err(BeauteError::join)?
}

impl PlanStudio {
    /// Opens the plan wizard on the stored draft.
    ///
    /// Opening an already open wizard keeps it as it is, including an
    /// outstanding generation.
    pub async fn open_wizard(&self) -> Result<WorkflowStatus> {
        let already_open = self.lock().workflow.wizard().is_some();
        if already_open {
            return Ok(self.status());
        }

        let drafts = self.drafts.clone();
        let draft = task::spawn_blocking(move || drafts.load())
            .await
            .map_err(BeauteError::join)?;

        let mut state = self.lock();
        if state.workflow.wizard().is_none() {
            debug!("Opening plan wizard");
            state.workflow = Workflow::Composing(PlanWizard::new(draft, self.previews.clone()));
        }
        Ok(state.workflow.status())
    }

    /// Applies `f` to the open wizard and stores the draft if it changed.
    ///
    /// Edits are accepted while a generation is outstanding; they persist
    /// but do not change the request already sent.
    ///
    /// # Errors
    ///
    /// Returns `BeauteError::WizardClosed` if no wizard is open.
    pub async fn edit<T>(&self, f: impl FnOnce(&mut PlanWizard) -> T) -> Result<T> {
        let (value, _persistence) = self.edit_and_persist(f).await?;
        Ok(value)
    }

    /// Like [`edit`](Self::edit), also reporting how the draft was stored.
    /// An edit that leaves the draft unchanged writes nothing and reports
    /// `Persistence::Stored`.
    async fn edit_and_persist<T>(
        &self,
        f: impl FnOnce(&mut PlanWizard) -> T,
    ) -> Result<(T, Persistence)> {
        let (value, changed) = {
            let mut guard = self.lock();
            let StudioState {
                workflow,
                draft_revision,
                ..
            } = &mut *guard;
            let wizard = workflow.wizard_mut().ok_or(BeauteError::WizardClosed)?;

            let before = wizard.draft().clone();
            let value = f(wizard);
            let changed = if *wizard.draft() == before {
                None
            } else {
                *draft_revision += 1;
                Some((*draft_revision, wizard.draft().clone()))
            };
            (value, changed)
        };

        let persistence = match changed {
            Some((revision, draft)) => self.write_draft(revision, Some(draft)).await?,
            None => Persistence::Stored,
        };
        Ok((value, persistence))
    }

    /// Writes (or, for `None`, removes) the stored draft on a blocking
    /// thread. A write older than one already done is skipped, so the store
    /// always ends on the latest revision.
    async fn write_draft(&self, revision: u64, draft: Option<PlanDraft>) -> Result<Persistence> {
        let drafts = self.drafts.clone();
        let writes = self.draft_writes.clone();
        task::spawn_blocking(move || {
            let mut written = writes.lock().unwrap_or_else(PoisonError::into_inner);
            if *written > revision {
                debug!("Skipping draft revision {revision}, {} already written", *written);
                return Persistence::Stored;
            }
            let outcome = match &draft {
                Some(draft) => drafts.save(draft),
                None => drafts.clear(),
            };
            *written = revision;
            outcome
        })
        .await
        .map_err(BeauteError::join)
    }

    /// Reads from the open wizard.
    ///
    /// # Errors
    ///
    /// Returns `BeauteError::WizardClosed` if no wizard is open.
    pub fn inspect<T>(&self, f: impl FnOnce(&PlanWizard) -> T) -> Result<T> {
        let state = self.lock();
        let wizard = state.workflow.wizard().ok_or(BeauteError::WizardClosed)?;
        Ok(f(wizard))
    }

    /// Opens the wizard if needed and applies the validated changes, storing
    /// the draft once.
    ///
    /// # Errors
    ///
    /// Returns `BeauteError::InvalidInput` for invalid parameters; nothing
    /// is changed in that case.
    pub async fn update_draft(&self, params: &UpdateDraft) -> Result<UpdateResult<PlanDraft>> {
        let edits = params.validate()?;
        self.open_wizard().await?;

        let (draft, persistence) = self
            .edit_and_persist(|wizard| {
                for edit in &edits {
                    edit.apply(wizard);
                }
                wizard.draft().clone()
            })
            .await?;

        let changes = edits.iter().map(DraftEdit::describe).collect();
        let result = UpdateResult::with_changes(draft, changes);
        Ok(if persistence.is_stored() {
            result
        } else {
            result.not_stored()
        })
    }

    /// Reads the given image files and attaches them to the open wizard,
    /// replacing the images in those slots. Returns the number attached.
    ///
    /// # Errors
    ///
    /// - `BeauteError::FileSystem` if a file cannot be read; no slot changes
    /// - `BeauteError::WizardClosed` if no wizard is open
    pub async fn attach_images(&self, images: &PlanImages) -> Result<usize> {
        let files = read_images(images).await?;
        let count = files.len();
        self.edit(|wizard| {
            for (kind, file) in files {
                wizard.attach(kind, file);
            }
        })
        .await?;
        Ok(count)
    }

    /// Makes the given images the only ones attached: slots not named in
    /// `images` are emptied. Returns the number attached.
    ///
    /// # Errors
    ///
    /// - `BeauteError::FileSystem` if a file cannot be read; no slot changes
    /// - `BeauteError::WizardClosed` if no wizard is open
    pub async fn replace_images(&self, images: &PlanImages) -> Result<usize> {
        let files = read_images(images).await?;
        let count = files.len();
        self.edit(|wizard| {
            for kind in [SlotKind::Goal, SlotKind::Current] {
                if !files.iter().any(|(slot, _)| *slot == kind) {
                    wizard.detach(kind);
                }
            }
            for (kind, file) in files {
                wizard.attach(kind, file);
            }
        })
        .await?;
        Ok(count)
    }

    /// The request description the open wizard would send now.
    pub fn prompt(&self) -> Result<String> {
        self.inspect(PlanWizard::build_prompt)
    }

    /// Closes the wizard, releasing its image previews. A generation still
    /// outstanding will have its result discarded. Returns whether a wizard
    /// was open.
    pub fn dismiss_wizard(&self) -> bool {
        let mut state = self.lock();
        if state.workflow.wizard().is_none() {
            return false;
        }
        debug!("Dismissing plan wizard from {}", state.workflow.status());
        state.workflow = Workflow::Idle;
        true
    }

    /// Loads the stored draft without opening the wizard.
    pub async fn load_draft(&self) -> Result<PlanDraft> {
        let drafts = self.drafts.clone();
        task::spawn_blocking(move || drafts.load())
            .await
            .map_err(BeauteError::join)
    }

    /// Removes the stored draft. An open wizard goes back to the default
    /// fields so later edits do not write the old ones back; a request
    /// already sent is unaffected.
    pub async fn clear_draft(&self) -> Result<Persistence> {
        let revision = {
            let mut state = self.lock();
            state.draft_revision += 1;
            if let Some(wizard) = state.workflow.wizard_mut() {
                wizard.reset_draft();
            }
            state.draft_revision
        };
        self.write_draft(revision, None).await
    }
}
