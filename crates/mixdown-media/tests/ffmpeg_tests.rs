//! FFmpeg integration tests.
//!
//! These drive the real tool and are ignored by default; run them with
//! `cargo test -- --ignored` on a machine with ffmpeg/ffprobe installed.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tempfile::TempDir;
use tokio::process::Command;

use mixdown_media::{concat_to_mp3, ensure_dir, normalize_to_mp3, probe_audio, MediaError};

/// Synthesize a sine-tone input file for the tests.
async fn make_tone(dir: &Path, name: &str, frequency: u32, seconds: u32) -> PathBuf {
    let path = dir.join(name);
    let status = Command::new("ffmpeg")
        .args([
            "-y",
            "-v",
            "error",
            "-f",
            "lavfi",
            "-i",
            &format!("sine=frequency={frequency}:duration={seconds}"),
        ])
        .arg(&path)
        .stdin(Stdio::null())
        .status()
        .await
        .expect("spawn ffmpeg");
    assert!(status.success(), "failed to synthesize {name}");
    path
}

#[tokio::test]
#[ignore = "requires ffmpeg"]
async fn test_normalize_produces_canonical_format() {
    let dir = TempDir::new().unwrap();
    let input = make_tone(dir.path(), "song.wav", 440, 2).await;
    let output = dir.path().join("track1.mp3");

    let written = normalize_to_mp3(&input, &output).await.unwrap();

    assert_eq!(written, output);
    assert!(output.exists());

    let info = probe_audio(&output).await.unwrap();
    assert_eq!(info.codec, "mp3");
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.channels, 2);
    assert!(!info.has_video);
}

#[tokio::test]
#[ignore = "requires ffmpeg"]
async fn test_concat_preserves_order_and_length() {
    let dir = TempDir::new().unwrap();

    let mut prepared = Vec::new();
    for (i, freq) in [440, 550, 660].iter().enumerate() {
        let raw = make_tone(dir.path(), &format!("part{i}.wav"), *freq, 1).await;
        let out = dir.path().join(format!("part{i}.mp3"));
        normalize_to_mp3(&raw, &out).await.unwrap();
        prepared.push(out);
    }

    let out_dir = dir.path().join("out");
    let scratch = out_dir.join("temp");
    ensure_dir(&scratch).await.unwrap();

    let output = out_dir.join("final.mp3");
    concat_to_mp3(&prepared, &output, &scratch).await.unwrap();

    assert!(output.exists());
    assert!(scratch.is_dir());

    // Three one-second segments; allow generous codec padding either way.
    let info = probe_audio(&output).await.unwrap();
    assert!(
        (info.duration - 3.0).abs() < 0.5,
        "unexpected merged duration {}",
        info.duration
    );
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 44_100);
}

#[tokio::test]
#[ignore = "requires ffmpeg"]
async fn test_missing_input_fails_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.mp3");

    let err = normalize_to_mp3("/nonexistent/input.wav", &output)
        .await
        .unwrap_err();

    match err {
        MediaError::FfmpegFailed { message, stderr, .. } => {
            assert!(!message.is_empty());
            assert!(stderr.map(|s| !s.trim().is_empty()).unwrap_or(false));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!output.exists(), "no output should be created on failure");
}
