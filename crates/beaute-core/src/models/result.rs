//! Generated plan text.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The most recent plan produced by the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    /// Freeform plan text as returned by the responder
    pub text: String,

    /// When the plan was generated (UTC)
    pub generated_at: Timestamp,
}

impl PlanResult {
    /// Wraps responder output, stamping it with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generated_at: Timestamp::now(),
        }
    }
}
