//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::store::Persistence;

/// How an operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// Completed, but something the user relies on did not happen
    Warning,
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Warning,
        }
    }

    /// Success if the change was stored, a warning naming `action` otherwise.
    pub fn for_persistence(persistence: Persistence, action: &str) -> Self {
        match persistence {
            Persistence::Stored => Self::success(action.to_string()),
            Persistence::InMemory => Self::warning(format!(
                "{action} for this session only; no database could be opened"
            )),
            Persistence::Degraded => {
                Self::warning(format!("{action} in memory only; storage is unavailable"))
            }
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
