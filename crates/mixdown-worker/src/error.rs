//! Worker error types.

use thiserror::Error;

pub type WorkerResult<T> = Result<T, WorkerError>;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Job failed: {0}")]
    JobFailed(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Media error: {0}")]
    Media(#[from] mixdown_media::MediaError),

    #[error("Queue error: {0}")]
    Queue(#[from] mixdown_queue::QueueError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkerError {
    pub fn job_failed(msg: impl Into<String>) -> Self {
        Self::JobFailed(msg.into())
    }

    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }

    /// Payload-invariant violations cannot be fixed by redelivery; they go
    /// straight to the dead-letter stream.
    pub fn is_permanent(&self) -> bool {
        matches!(self, WorkerError::InvalidPayload(_))
    }
}
