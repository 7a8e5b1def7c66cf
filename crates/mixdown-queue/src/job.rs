//! Job envelopes for the queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mixdown_models::{JobId, JobKind, MergePayload, PreparePayload};

/// Job to normalize one input file into the canonical format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareJob {
    /// Unique job ID
    pub job_id: JobId,
    /// Prepare payload
    pub payload: PreparePayload,
    /// When the job was created
    pub created_at: DateTime<Utc>,
}

impl PrepareJob {
    /// Create a new prepare job.
    pub fn new(payload: PreparePayload) -> Self {
        Self {
            job_id: JobId::new(),
            payload,
            created_at: Utc::now(),
        }
    }

    /// Generate idempotency key for deduplication.
    pub fn idempotency_key(&self) -> String {
        format!(
            "prepare:{}:{}",
            self.payload.temp_dir.display(),
            self.payload.output_file_name
        )
    }
}

/// Job to concatenate prepared files into one output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeJob {
    /// Unique job ID
    pub job_id: JobId,
    /// Merge payload
    pub payload: MergePayload,
    /// When the job was created
    pub created_at: DateTime<Utc>,
}

impl MergeJob {
    /// Create a new merge job.
    pub fn new(payload: MergePayload) -> Self {
        Self {
            job_id: JobId::new(),
            payload,
            created_at: Utc::now(),
        }
    }

    /// Generate idempotency key for deduplication.
    pub fn idempotency_key(&self) -> String {
        format!(
            "merge:{}:{}",
            self.payload.output_dir.display(),
            self.payload.output_file_name
        )
    }
}

/// Generic job wrapper for queue storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueueJob {
    /// Prepare stage: normalize one input
    Prepare(PrepareJob),
    /// Merge stage: concatenate prepared inputs
    Merge(MergeJob),
}

impl QueueJob {
    pub fn job_id(&self) -> &JobId {
        match self {
            QueueJob::Prepare(j) => &j.job_id,
            QueueJob::Merge(j) => &j.job_id,
        }
    }

    /// The kind deciding which stream the job is routed to.
    pub fn kind(&self) -> JobKind {
        match self {
            QueueJob::Prepare(_) => JobKind::Prepare,
            QueueJob::Merge(_) => JobKind::Merge,
        }
    }

    pub fn idempotency_key(&self) -> String {
        match self {
            QueueJob::Prepare(j) => j.idempotency_key(),
            QueueJob::Merge(j) => j.idempotency_key(),
        }
    }
}
