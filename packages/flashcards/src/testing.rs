//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the flashcard library
//! without a real NLP engine or network calls to a model.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::analyzers::split_sentences;
use crate::error::{AnalyzerError, ModelError};
use crate::traits::{
    analyzer::{Tagging, TextAnalyzer},
    model::{CompletionOptions, GenerativeModel},
};
use crate::types::chunk::Sentence;

/// What the mock model does for a prompt.
#[derive(Debug, Clone)]
enum Outcome {
    Respond(String),
    Fail,
}

/// A mock generative model for testing.
///
/// Responses are picked by the first registered needle contained in the
/// prompt, falling back to a default. Matching on prompt content keeps
/// results stable when chunks are extracted concurrently.
pub struct MockModel {
    /// (needle, outcome) pairs, checked in registration order
    scripted: Arc<RwLock<Vec<(String, Outcome)>>>,

    /// Outcome when no needle matches
    default: Outcome,

    /// (needle, delay) pairs applied before answering
    delays: Arc<RwLock<Vec<(String, Duration)>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockModelCall {
    pub prompt: String,
    pub options: CompletionOptions,
}

impl Default for MockModel {
    fn default() -> Self {
        Self {
            scripted: Arc::default(),
            default: Outcome::Respond(String::new()),
            delays: Arc::default(),
            calls: Arc::default(),
        }
    }
}

impl MockModel {
    /// Create a mock that answers every prompt with an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every unmatched prompt with `response`.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.default = Outcome::Respond(response.into());
        self
    }

    /// Fail every unmatched prompt.
    pub fn failing(mut self) -> Self {
        self.default = Outcome::Fail;
        self
    }

    /// Answer prompts containing `needle` with `response`.
    pub fn with_response_for(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.scripted
            .write()
            .unwrap()
            .push((needle.into(), Outcome::Respond(response.into())));
        self
    }

    /// Fail prompts containing `needle`.
    pub fn with_failure_for(self, needle: impl Into<String>) -> Self {
        self.scripted
            .write()
            .unwrap()
            .push((needle.into(), Outcome::Fail));
        self
    }

    /// Hold back the answer to prompts containing `needle` by `delay`.
    pub fn with_delay_for(self, needle: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().push((needle.into(), delay));
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn delay_for(&self, prompt: &str) -> Option<Duration> {
        self.delays
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, delay)| *delay)
    }

    fn outcome_for(&self, prompt: &str) -> Outcome {
        self.scripted
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or_else(|| self.default.clone())
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<String, ModelError> {
        self.calls.write().unwrap().push(MockModelCall {
            prompt: prompt.to_string(),
            options,
        });

        if let Some(delay) = self.delay_for(prompt) {
            tokio::time::sleep(delay).await;
        }

        match self.outcome_for(prompt) {
            Outcome::Respond(response) => Ok(response),
            Outcome::Fail => Err(ModelError::Unreachable("mock model unreachable".into())),
        }
    }
}

/// A mock text analyzer for testing.
///
/// Segments on punctuation and returns a fixed tagging, or fails every
/// call when built with [`MockAnalyzer::failing`].
#[derive(Default)]
pub struct MockAnalyzer {
    tagging: Option<Tagging>,
    fail: bool,
    tag_calls: AtomicUsize,
}

impl MockAnalyzer {
    /// Create a mock with punctuation segmentation and empty tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `tagging` from every `tag` call.
    pub fn with_tagging(mut self, tagging: Tagging) -> Self {
        self.tagging = Some(tagging);
        self
    }

    /// Fail every call.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of `tag` calls so far.
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.load(Ordering::SeqCst)
    }
}

impl TextAnalyzer for MockAnalyzer {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError> {
        if self.fail {
            return Err(AnalyzerError::Unavailable("mock analyzer".to_string()));
        }
        Ok(split_sentences(text))
    }

    fn tag(&self, text: &str) -> Result<Tagging, AnalyzerError> {
        self.tag_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AnalyzerError::Unavailable("mock analyzer".to_string()));
        }

        Ok(self.tagging.clone().unwrap_or_else(|| Tagging {
            sentences: split_sentences(text),
            ..Default::default()
        }))
    }
}
