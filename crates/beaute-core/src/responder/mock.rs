//! Canned-answer responder used until a real backend exists.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::debug;
use rand::seq::IndexedRandom;

use super::{PlanResponder, ResponderError};

/// Suggestions the mock picks from.
pub const SUGGESTIONS: [&str; 4] = [
    "A best mix of weekly home care and salon visits",
    "Budget allocation optimized across treatments, products and clinic visits",
    "Booking candidates built around the next two weeks of your schedule",
    "Three products compared against your concern tags, with the best option highlighted",
];

/// Number of prompt characters echoed back in a mock answer.
pub const PROMPT_ECHO_CHARS: usize = 60;

/// Artificial latency of the mock when none is configured.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(600);

/// Chooses which canned suggestion the mock answers with.
pub trait SuggestionSource: Send + Sync {
    fn pick(&self, suggestions: &[&'static str]) -> &'static str;
}

/// Uniformly random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSuggestion;

impl SuggestionSource for RandomSuggestion {
    fn pick(&self, suggestions: &[&'static str]) -> &'static str {
        let mut rng = rand::rng();
        suggestions.choose(&mut rng).copied().unwrap_or(SUGGESTIONS[0])
    }
}

/// Always the suggestion at the given index (wrapping).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSuggestion(pub usize);

impl SuggestionSource for FixedSuggestion {
    fn pick(&self, suggestions: &[&'static str]) -> &'static str {
        suggestions
            .get(self.0 % suggestions.len().max(1))
            .copied()
            .unwrap_or(SUGGESTIONS[0])
    }
}

/// Responder that sleeps, then returns a canned suggestion plus a truncated
/// echo of the prompt.
#[derive(Clone)]
pub struct MockResponder {
    delay: Duration,
    source: Arc<dyn SuggestionSource>,
}

impl MockResponder {
    /// A mock with the default delay and random suggestions.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_MOCK_DELAY,
            source: Arc::new(RandomSuggestion),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_source(mut self, source: impl SuggestionSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Formats the answer for a picked suggestion.
    fn answer(suggestion: &str, prompt: &str) -> String {
        let echo: String = prompt.chars().take(PROMPT_ECHO_CHARS).collect();
        format!("[AI plan proposal (mock)]\n{suggestion}\n\nRequirements: {echo}…")
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanResponder for MockResponder {
    async fn respond(&self, prompt: &str) -> Result<String, ResponderError> {
        debug!("Mock responder answering after {:?}", self.delay);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let suggestion = self.source.pick(&SUGGESTIONS);
        Ok(Self::answer(suggestion, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_mock(index: usize) -> MockResponder {
        MockResponder::new()
            .with_delay(Duration::ZERO)
            .with_source(FixedSuggestion(index))
    }

    #[tokio::test]
    async fn test_answer_format() {
        let text = instant_mock(1).respond("Goal: glow").await.unwrap();
        assert_eq!(
            text,
            format!("[AI plan proposal (mock)]\n{}\n\nRequirements: Goal: glow…", SUGGESTIONS[1])
        );
    }

    #[tokio::test]
    async fn test_echo_is_truncated_to_sixty_chars() {
        let prompt = "あ".repeat(100);
        let text = instant_mock(0).respond(&prompt).await.unwrap();
        let echo = text
            .rsplit("Requirements: ")
            .next()
            .unwrap()
            .trim_end_matches('…');
        assert_eq!(echo.chars().count(), PROMPT_ECHO_CHARS);
    }

    #[tokio::test]
    async fn test_random_pick_is_a_known_suggestion() {
        let mock = MockResponder::new().with_delay(Duration::ZERO);
        for _ in 0..20 {
            let text = mock.respond("x").await.unwrap();
            assert!(SUGGESTIONS.iter().any(|s| text.contains(s)), "{text}");
        }
    }

    #[test]
    fn test_fixed_suggestion_wraps() {
        assert_eq!(FixedSuggestion(5).pick(&SUGGESTIONS), SUGGESTIONS[1]);
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let mock = instant_mock(0).with_delay(Duration::from_millis(20));
        let started = std::time::Instant::now();
        mock.respond("x").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
