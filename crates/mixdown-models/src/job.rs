//! Job identity and lifecycle types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical category of work, routed to its own stream and bounded by its
/// own concurrency cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Normalize one input file into the canonical format
    Prepare,
    /// Concatenate prepared files into one output
    Merge,
}

impl JobKind {
    /// Every kind the worker consumes.
    pub const ALL: [JobKind; 2] = [JobKind::Prepare, JobKind::Merge];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Prepare => "prepare",
            JobKind::Merge => "merge",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job lifecycle state, owned by the queue substrate.
///
/// Handlers never set these directly: returning `Ok`/`Err` drives the
/// waiting → active → completed/failed transitions, and the substrate
/// dead-letters a job once its retries are exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Job is waiting in its stream
    #[default]
    Waiting,
    /// Job has been dispatched to a handler
    Active,
    /// Handler returned successfully
    Completed,
    /// Handler failed (may be redelivered)
    Failed,
    /// Moved to the dead-letter stream after max retries
    DeadLettered,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Waiting => "waiting",
            JobState::Active => "active",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
            JobState::DeadLettered => "dead_lettered",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::DeadLettered)
    }
}
