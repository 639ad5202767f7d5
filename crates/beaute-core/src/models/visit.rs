//! Salon visits scheduled on the plan timeline.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One salon appointment on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledVisit {
    pub date: Date,

    /// Treatment and salon, e.g. "Cut & color (Omotesando salon A)"
    pub title: String,

    pub duration_minutes: u32,
}
