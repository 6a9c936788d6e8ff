//! Bootstrap attempt models.
//!
//! Records what each attempt against the credential-initialization endpoint
//! produced, so callers and tests can inspect the run after the fact.

use serde::Serialize;

/// Raw response from the endpoint, exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// Result of a single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// A response arrived, whatever its status.
    Responded(EndpointResponse),
    /// The request failed before a response arrived.
    Failed {
        /// Error text.
        error: String,
    },
}

/// One entry of the attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    /// Attempt number (1-based).
    pub attempt: u32,
    /// What happened.
    pub outcome: AttemptOutcome,
    /// Whether the loop slept after this attempt.
    pub delayed: bool,
}

/// Summary of a whole bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    /// Attempts in order.
    pub attempts: Vec<AttemptRecord>,
}

impl BootstrapReport {
    /// Number of attempts made.
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Number of delays taken between attempts.
    pub fn delay_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.delayed).count()
    }

    /// The response that ended the loop, if any.
    pub fn response(&self) -> Option<&EndpointResponse> {
        self.attempts.iter().find_map(|a| match &a.outcome {
            AttemptOutcome::Responded(response) => Some(response),
            AttemptOutcome::Failed { .. } => None,
        })
    }

    /// Whether the service answered at all.
    pub fn is_available(&self) -> bool {
        self.response().is_some()
    }
}
