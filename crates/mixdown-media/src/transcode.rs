//! Prepare stage: normalization into the canonical audio format.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use mixdown_models::encoding::{
    CANONICAL_AUDIO_CODEC, CANONICAL_CHANNELS, CANONICAL_FORMAT, CANONICAL_SAMPLE_RATE,
};

use crate::command::FfmpegCommand;
use crate::error::MediaResult;

/// Normalize `input` into the canonical mp3 format at `output`.
///
/// Strips any video stream, encodes with libmp3lame, resamples to
/// 44.1 kHz and forces 2 output channels. Exactly one ffmpeg invocation;
/// returns the path written to. No partial-output cleanup happens on
/// failure.
pub async fn normalize_to_mp3(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> MediaResult<PathBuf> {
    let input = input.as_ref();
    let output = output.as_ref();

    debug!(
        input = %input.display(),
        output = %output.display(),
        "Normalizing audio"
    );

    FfmpegCommand::new(input, output)
        .no_video()
        .audio_codec(CANONICAL_AUDIO_CODEC)
        .audio_filter(format!("aresample={}", CANONICAL_SAMPLE_RATE))
        .audio_channels(CANONICAL_CHANNELS)
        .format(CANONICAL_FORMAT)
        .run()
        .await?;

    info!(output = %output.display(), "Normalized audio");
    Ok(output.to_path_buf())
}
