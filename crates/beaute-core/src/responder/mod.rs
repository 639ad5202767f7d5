//! The plan responder: turns a request description into plan text.
//!
//! [`PlanResponder`] is the seam where a real model backend plugs in. The
//! crate ships [`MockResponder`], which waits for a configurable delay and
//! answers with one of a few canned suggestions.

use async_trait::async_trait;
use thiserror::Error;

pub mod mock;

pub use mock::{
    FixedSuggestion, MockResponder, RandomSuggestion, SuggestionSource, DEFAULT_MOCK_DELAY,
    SUGGESTIONS,
};

/// Failures a responder can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponderError {
    /// The backend could not be reached or refused the request
    #[error("responder unavailable: {0}")]
    Unavailable(String),
    /// The backend answered with something that is not plan text
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Produces plan text from a request description.
///
/// Implementations must eventually resolve. The studio calls `respond` at
/// most once per triggered generation.
#[async_trait]
pub trait PlanResponder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String, ResponderError>;
}
