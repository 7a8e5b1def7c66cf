//! Merge stage: concatenation of prepared files via the concat demuxer.
//!
//! The demuxer needs a list file naming the inputs in order; that file
//! lives in the caller-staged scratch directory. The combined stream is
//! re-encoded to the canonical codec, so prepared inputs of different
//! bitrates still merge into one consistent output.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use mixdown_models::encoding::{
    CANONICAL_AUDIO_CODEC, CANONICAL_CHANNELS, CANONICAL_FORMAT, CANONICAL_SAMPLE_RATE,
};

use crate::command::FfmpegCommand;
use crate::error::MediaResult;

/// Concatenate `files` in listed order into `output`.
///
/// `scratch_dir` must already exist; it receives the concat demuxer list
/// file. Input order is preserved verbatim, with no reordering, dedup, or
/// content validation beyond what ffmpeg does when opening the files.
pub async fn concat_to_mp3(
    files: &[PathBuf],
    output: impl AsRef<Path>,
    scratch_dir: impl AsRef<Path>,
) -> MediaResult<PathBuf> {
    let output = output.as_ref();
    let scratch_dir = scratch_dir.as_ref();

    let list_path = scratch_dir.join(list_file_name(output));
    fs::write(&list_path, concat_list(files)).await?;

    debug!(
        inputs = files.len(),
        list = %list_path.display(),
        output = %output.display(),
        "Concatenating audio"
    );

    FfmpegCommand::new(&list_path, output)
        .input_args(["-f", "concat", "-safe", "0"])
        .no_video()
        .audio_codec(CANONICAL_AUDIO_CODEC)
        .audio_filter(format!("aresample={}", CANONICAL_SAMPLE_RATE))
        .audio_channels(CANONICAL_CHANNELS)
        .format(CANONICAL_FORMAT)
        .run()
        .await?;

    info!(
        inputs = files.len(),
        output = %output.display(),
        "Concatenated audio"
    );
    Ok(output.to_path_buf())
}

/// Render the concat demuxer list, one input per line, order preserved.
fn concat_list(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|p| format!("file '{}'\n", escape_path(p)))
        .collect()
}

/// Single quotes in paths use the demuxer's `'\''` escape.
fn escape_path(path: &Path) -> String {
    path.display().to_string().replace('\'', r"'\''")
}

/// List file named after the output so reruns overwrite their own list.
fn list_file_name(output: &Path) -> String {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "merge".to_string());
    format!("{stem}.ffconcat")
}
