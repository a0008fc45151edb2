//! Deterministic extractor for tests and offline runs

use anyhow::{anyhow, Result};
use cassist_types::ExtractorOutput;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::extractor::IntentExtractor;

/// A canned reply: either an extractor output or a failure message.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Output(ExtractorOutput),
    Failure(String),
}

/// Replays scripted replies in order and counts invocations.
///
/// Once the script is exhausted every further call fails, so a test that
/// expects the extractor not to be reached can also assert on [`calls`].
///
/// [`calls`]: ScriptedExtractor::calls
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: AtomicUsize,
}

impl ScriptedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(self, output: ExtractorOutput) -> Self {
        self.push(ScriptedReply::Output(output));
        self
    }

    pub fn with_function_call(self, name: &str, arguments: serde_json::Value) -> Self {
        self.with_output(ExtractorOutput::function_call(name, arguments.to_string()))
    }

    pub fn with_plain_text(self, text: &str) -> Self {
        self.with_output(ExtractorOutput::plain_text(text))
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.push(ScriptedReply::Failure(message.to_string()));
        self
    }

    /// Number of times `extract_intent` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, reply: ScriptedReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

#[async_trait::async_trait]
impl IntentExtractor for ScriptedExtractor {
    async fn extract_intent(&self, _text: &str) -> Result<ExtractorOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self
            .replies
            .lock()
            .map_err(|_| anyhow!("scripted extractor lock poisoned"))?
            .pop_front();

        match next {
            Some(ScriptedReply::Output(output)) => Ok(output),
            Some(ScriptedReply::Failure(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("scripted extractor has no reply left")),
        }
    }
}
