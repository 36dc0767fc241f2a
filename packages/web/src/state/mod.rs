//! Form controller state for the extraction page
//!
//! The page owns exactly one [`ExtractForm`] inside a signal; every
//! transition happens on the UI event loop, so no locking is involved.

use extract_client::{ExtractRequest, ExtractResponse};

/// Shown when a failure carries no usable message.
pub const FALLBACK_ERROR: &str = "Failed to extract data";

/// Lifecycle of the single extraction operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success(ExtractResponse),
    Failed(String),
}

/// State machine behind the extraction form.
///
/// Field edits are plain mutations; `begin_submit` gates the request
/// lifecycle. Completions are stamped with a generation so a response that
/// lands after `reset` (or after being superseded) is dropped instead of
/// mutating state.
#[derive(Debug, Default)]
pub struct ExtractForm {
    url: String,
    prompt: String,
    phase: Phase,
    generation: u64,
}

impl ExtractForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn set_url(&mut self, value: String) {
        self.url = value;
    }

    pub fn set_prompt(&mut self, value: String) {
        self.prompt = value;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    /// Both fields filled and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.url.trim().is_empty() && !self.prompt.trim().is_empty() && !self.is_pending()
    }

    /// Accept a submit: clear any previous result, move to `Pending`, and
    /// hand back the stamped request. Returns `None` when a field is empty
    /// or a request is already in flight; state is untouched in that case.
    pub fn begin_submit(&mut self) -> Option<(u64, ExtractRequest)> {
        if !self.can_submit() {
            return None;
        }

        self.generation += 1;
        self.phase = Phase::Pending;
        Some((
            self.generation,
            ExtractRequest {
                url: self.url.trim().to_string(),
                prompt: self.prompt.trim().to_string(),
            },
        ))
    }

    /// Complete the request stamped with `generation`. Stale completions,
    /// i.e. anything in flight when the form was reset, are dropped.
    pub fn resolve(&mut self, generation: u64, outcome: Result<ExtractResponse, String>) {
        if generation != self.generation || !self.is_pending() {
            return;
        }

        self.phase = match outcome {
            Ok(response) => Phase::Success(response),
            Err(message) => {
                let message = message.trim();
                if message.is_empty() {
                    Phase::Failed(FALLBACK_ERROR.to_string())
                } else {
                    Phase::Failed(message.to_string())
                }
            }
        };
    }

    /// Back to `Idle` with the result cleared. Invalidates any in-flight
    /// completion; field contents are kept.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
    }
}
