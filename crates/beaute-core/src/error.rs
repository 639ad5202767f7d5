//! Error types for the plan workflow library.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::responder::ResponderError;

/// Comprehensive error type for all studio operations.
///
/// Persistence failures of the draft and latest-plan records never show up
/// here: the stores swallow them. These variants cover the operations that
/// can genuinely fail for the caller.
#[derive(Error, Debug)]
pub enum BeauteError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// An operation needed the plan wizard but none is open
    #[error("No plan wizard is open")]
    WizardClosed,
    /// A generation was triggered while another one is still outstanding
    #[error("A plan is already being generated")]
    GenerationInProgress,
    /// The plan responder failed
    #[error("Plan responder failed: {0}")]
    Responder(#[from] ResponderError),
    /// The plan responder did not answer in time
    #[error("Plan responder timed out after {0:?}")]
    ResponderTimeout(Duration),
}

impl BeauteError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a failed `spawn_blocking` join.
    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BeauteError::database_error(message, e))
    }
}

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, BeauteError>;
