//! End-to-end handler tests against real ffmpeg.
//!
//! Ignored by default; run with `cargo test -- --ignored` where
//! ffmpeg/ffprobe are installed.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tempfile::TempDir;
use tokio::process::Command;

use mixdown_media::probe_audio;
use mixdown_models::{MergePayload, PreparePayload};
use mixdown_queue::{MergeJob, PrepareJob};
use mixdown_worker::handlers::{handle_merge, handle_prepare};
use mixdown_worker::WorkerError;

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
async fn test_prepare_then_merge_pipeline() {
    let root = TempDir::new().unwrap();

    // Stage 1: two prepare jobs, each into its own temp dir.
    let mut prepared = Vec::new();
    for i in 1..=2u32 {
        let temp_dir = root.path().join(format!("job{i}"));
        tokio::fs::create_dir_all(&temp_dir).await.unwrap();
        let source = make_tone(root.path(), &format!("song{i}.wav"), 330 * i, 1).await;

        let job = PrepareJob::new(PreparePayload {
            temp_dir: temp_dir.clone(),
            original_file_path: source,
            output_file_name: format!("track{i}"),
        });
        handle_prepare(&job).await.unwrap();

        let output = temp_dir.join(format!("track{i}.mp3"));
        assert!(output.exists(), "prepare output missing");
        prepared.push(output);
    }

    // Stage 2: merge the prepared files.
    let out_dir = root.path().join("out");
    tokio::fs::create_dir_all(&out_dir).await.unwrap();

    let job = MergeJob::new(MergePayload {
        output_dir: out_dir.clone(),
        output_file_name: "final.mp3".to_string(),
        files: prepared,
    });
    handle_merge(&job).await.unwrap();

    assert!(out_dir.join("final.mp3").exists());
    assert!(out_dir.join("temp").is_dir(), "merge scratch dir missing");

    let info = probe_audio(out_dir.join("final.mp3")).await.unwrap();
    assert_eq!(info.codec, "mp3");
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.channels, 2);
    assert!((info.duration - 2.0).abs() < 0.5);
}

#[tokio::test]
#[ignore = "requires ffmpeg"]
async fn test_prepare_failure_carries_tool_diagnostic() {
    let root = TempDir::new().unwrap();
    let temp_dir = root.path().join("job1");
    tokio::fs::create_dir_all(&temp_dir).await.unwrap();

    let job = PrepareJob::new(PreparePayload {
        temp_dir: temp_dir.clone(),
        original_file_path: root.path().join("missing.wav"),
        output_file_name: "track1".to_string(),
    });

    let err = handle_prepare(&job).await.unwrap_err();
    match err {
        WorkerError::Media(media) => {
            assert!(!media.to_string().is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!temp_dir.join("track1.mp3").exists());
}

#[tokio::test]
#[ignore = "requires ffmpeg"]
async fn test_merge_is_idempotent_over_scratch_dir() {
    let root = TempDir::new().unwrap();
    let temp_dir = root.path().join("job1");
    tokio::fs::create_dir_all(&temp_dir).await.unwrap();

    let source = make_tone(root.path(), "song.wav", 440, 1).await;
    let prepare = PrepareJob::new(PreparePayload {
        temp_dir: temp_dir.clone(),
        original_file_path: source,
        output_file_name: "track1".to_string(),
    });
    handle_prepare(&prepare).await.unwrap();

    let out_dir = root.path().join("out");
    tokio::fs::create_dir_all(&out_dir).await.unwrap();
    let files = vec![temp_dir.join("track1.mp3")];

    // Two merges in a row share the scratch dir; the second must not
    // trip over it already existing.
    for name in ["first.mp3", "second.mp3"] {
        let job = MergeJob::new(MergePayload {
            output_dir: out_dir.clone(),
            output_file_name: name.to_string(),
            files: files.clone(),
        });
        handle_merge(&job).await.unwrap();
        assert!(out_dir.join(name).exists());
    }
}
