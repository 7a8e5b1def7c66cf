//! Shared data models for the mixdown audio pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Job identity, kinds and lifecycle states
//! - Prepare/merge payloads with invariant validation
//! - Canonical audio format constants

pub mod encoding;
pub mod job;
pub mod payload;

// Re-export common types
pub use encoding::{
    CANONICAL_AUDIO_CODEC, CANONICAL_CHANNELS, CANONICAL_EXTENSION, CANONICAL_FORMAT,
    CANONICAL_SAMPLE_RATE,
};
pub use job::{JobId, JobKind, JobState};
pub use payload::{MergePayload, PreparePayload};
