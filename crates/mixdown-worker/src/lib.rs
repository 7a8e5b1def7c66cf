//! Audio processing worker.
//!
//! This crate provides:
//! - Per-kind serial consumption loops for prepare and merge jobs
//! - Handlers binding queue envelopes to the ffmpeg invokers
//! - Structured job logging
//! - Graceful shutdown

pub mod config;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod logging;

pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use executor::JobExecutor;
pub use logging::JobLogger;
