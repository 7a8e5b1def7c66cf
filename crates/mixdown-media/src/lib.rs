//! FFmpeg CLI wrapper for the mixdown audio pipeline.
//!
//! This crate provides:
//! - A builder for one-shot ffmpeg invocations
//! - The prepare-stage normalizer and merge-stage concatenator
//! - FFprobe audio inspection
//! - Filesystem staging helpers

pub mod command;
pub mod concat;
pub mod error;
pub mod fs_utils;
pub mod probe;
pub mod transcode;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand};
pub use concat::concat_to_mp3;
pub use error::{MediaError, MediaResult};
pub use fs_utils::ensure_dir;
pub use probe::{probe_audio, AudioInfo};
pub use transcode::normalize_to_mp3;
