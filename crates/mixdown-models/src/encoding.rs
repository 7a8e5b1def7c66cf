//! Canonical audio format constants.
//!
//! Every prepared file is normalized to this format, and merges re-encode
//! to it. Concatenation relies on all inputs sharing these parameters.

/// Audio codec identifier passed to the external tool
pub const CANONICAL_AUDIO_CODEC: &str = "libmp3lame";

/// Output container format
pub const CANONICAL_FORMAT: &str = "mp3";

/// File extension appended to prepared outputs
pub const CANONICAL_EXTENSION: &str = "mp3";

/// Target sample rate in Hz
pub const CANONICAL_SAMPLE_RATE: u32 = 44_100;

/// Target channel count
pub const CANONICAL_CHANNELS: u8 = 2;
