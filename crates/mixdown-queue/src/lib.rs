//! Redis Streams job queue for the mixdown pipeline.
//!
//! This crate provides:
//! - Per-kind job streams with independent consumer state
//! - At-least-once delivery with ack, retry counters and a dead-letter stream
//! - Crash recovery via pending-entry claims

pub mod error;
pub mod job;
pub mod queue;

pub use error::{QueueError, QueueResult};
pub use job::{MergeJob, PrepareJob, QueueJob};
pub use queue::{JobQueue, QueueConfig};
