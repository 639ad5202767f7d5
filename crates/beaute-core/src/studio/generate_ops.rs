//! Plan generation for the PlanStudio.

use std::sync::{Arc, Mutex};

use log::{debug, info};
use tokio::task;

use super::{lock_state, PlanStudio, StudioState};
use crate::{
    error::{BeauteError, Result},
    models::PlanResult,
    workflow::Workflow,
};

/// Puts the wizard back into Composing if its generation ends without a
/// result: responder failure, timeout, or the generation future being
/// dropped.
struct InFlight {
    state: Arc<Mutex<StudioState>>,
    epoch: u64,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut state = lock_state(&self.state);
        let current = match &state.workflow {
            Workflow::Submitting { epoch, .. } => *epoch,
            _ => return,
        };
        if current != self.epoch {
            return;
        }
        if let Workflow::Submitting { wizard, .. } =
            std::mem::replace(&mut state.workflow, Workflow::Idle)
        {
            debug!("Generation {} ended without a plan, back to composing", self.epoch);
            state.workflow = Workflow::Composing(wizard);
        }
    }
}

impl PlanStudio {
    /// Sends the open wizard's request to the responder.
    ///
    /// On success the wizard closes (its previews are released), the result
    /// becomes the latest plan and the studio shows it. If the wizard was
    /// dismissed while the responder was working, the late result is
    /// discarded and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// - `BeauteError::GenerationInProgress` if a generation is outstanding;
    ///   the responder is not called again
    /// - `BeauteError::WizardClosed` if no wizard is open
    /// - `BeauteError::Responder` / `BeauteError::ResponderTimeout` if the
    ///   responder fails; the wizard stays open for another attempt
    pub async fn generate(&self) -> Result<Option<PlanResult>> {
        let (epoch, prompt) = self.begin_generation()?;
        let in_flight = InFlight {
            state: self.state.clone(),
            epoch,
        };

        let text = self.call_responder(&prompt).await?;
        let result = PlanResult::new(text);
        let accepted = self.finish_generation(epoch, &result);
        drop(in_flight);

        if !accepted {
            return Ok(None);
        }

        let plans = self.plans.clone();
        let stored = result.clone();
        task::spawn_blocking(move || plans.save(&stored))
            .await
            .map_err(BeauteError::join)?;

        info!("Generated plan {epoch}");
        Ok(Some(result))
    }

    /// Composing → Submitting. Returns the generation epoch and the prompt.
    fn begin_generation(&self) -> Result<(u64, String)> {
        let mut state = self.lock();
        let wizard = match std::mem::replace(&mut state.workflow, Workflow::Idle) {
            Workflow::Composing(wizard) => wizard,
            other => {
                let in_flight = matches!(other, Workflow::Submitting { .. });
                state.workflow = other;
                return Err(if in_flight {
                    BeauteError::GenerationInProgress
                } else {
                    BeauteError::WizardClosed
                });
            }
        };

        state.last_epoch += 1;
        let epoch = state.last_epoch;
        let prompt = wizard.build_prompt();
        debug!("Starting generation {epoch}");
        state.workflow = Workflow::Submitting { wizard, epoch };
        Ok((epoch, prompt))
    }

    async fn call_responder(&self, prompt: &str) -> Result<String> {
        let call = self.responder.respond(prompt);
        let text = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| BeauteError::ResponderTimeout(limit))??,
            None => call.await?,
        };
        Ok(text)
    }

    /// Submitting → ShowingResult, unless the generation went stale.
    fn finish_generation(&self, epoch: u64, result: &PlanResult) -> bool {
        let mut state = self.lock();
        match &state.workflow {
            Workflow::Submitting { epoch: current, .. } if *current == epoch => {}
            _ => {
                debug!("Discarding stale result of generation {epoch}");
                return false;
            }
        }
        // Replacing the Submitting state drops the wizard and its previews.
        state.workflow = Workflow::ShowingResult;
        state.latest = Some(result.clone());
        true
    }

    /// Hides the displayed result. Returns whether one was displayed.
    pub fn close_result(&self) -> bool {
        let mut state = self.lock();
        if matches!(state.workflow, Workflow::ShowingResult) {
            state.workflow = Workflow::Idle;
            true
        } else {
            false
        }
    }

    /// The most recent plan of this studio, or the persisted one.
    pub async fn latest_plan(&self) -> Result<Option<PlanResult>> {
        let cached = self.lock().latest.clone();
        if cached.is_some() {
            return Ok(cached);
        }

        let plans = self.plans.clone();
        task::spawn_blocking(move || plans.load())
            .await
            .map_err(BeauteError::join)
    }
}
