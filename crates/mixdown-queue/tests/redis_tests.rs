//! Redis/Queue integration tests.

use std::path::PathBuf;

use mixdown_models::{JobKind, MergePayload, PreparePayload};
use mixdown_queue::{JobQueue, MergeJob, PrepareJob};

fn prepare_job(tag: &str) -> PrepareJob {
    PrepareJob::new(PreparePayload {
        temp_dir: PathBuf::from(format!("/tmp/mixdown-test/{tag}")),
        original_file_path: PathBuf::from("/in/song.wav"),
        output_file_name: format!("track-{tag}"),
    })
}

/// Test Redis connection and basic operations.
#[tokio::test]
#[ignore = "requires Redis"]
async fn test_redis_connection() {
    dotenvy::dotenv().ok();

    let queue = JobQueue::from_env().expect("Failed to create queue");
    queue.init().await.expect("Failed to initialize queue");

    let len = queue
        .len(JobKind::Prepare)
        .await
        .expect("Failed to get queue length");
    println!("Prepare queue length: {}", len);
}

/// Test job enqueue and dequeue cycle with per-kind routing.
#[tokio::test]
#[ignore = "requires Redis"]
async fn test_enqueue_routes_by_kind() {
    dotenvy::dotenv().ok();

    let queue = JobQueue::from_env().expect("Failed to create queue");
    queue.init().await.expect("Failed to initialize queue");

    let prepare = prepare_job("routing");
    let prepare_id = prepare.job_id.clone();
    queue
        .enqueue_prepare(prepare)
        .await
        .expect("Failed to enqueue prepare");

    let merge = MergeJob::new(MergePayload {
        output_dir: PathBuf::from("/tmp/mixdown-test/out"),
        output_file_name: "final.mp3".to_string(),
        files: vec![PathBuf::from("/tmp/mixdown-test/routing/track-routing.mp3")],
    });
    let merge_id = merge.job_id.clone();
    queue
        .enqueue_merge(merge)
        .await
        .expect("Failed to enqueue merge");

    // The prepare stream must only hand back the prepare job.
    let jobs = queue
        .consume(JobKind::Prepare, "test-consumer", 1000, 10)
        .await
        .expect("Failed to consume prepare");
    assert!(jobs.iter().all(|(_, j)| j.kind() == JobKind::Prepare));
    let (msg_id, consumed) = jobs
        .iter()
        .find(|(_, j)| j.job_id() == &prepare_id)
        .expect("prepare job not delivered");
    queue
        .ack(JobKind::Prepare, msg_id)
        .await
        .expect("Failed to ack");
    queue.clear_dedup(consumed).await.expect("Failed to clear dedup");

    // And the merge stream only the merge job.
    let jobs = queue
        .consume(JobKind::Merge, "test-consumer", 1000, 10)
        .await
        .expect("Failed to consume merge");
    assert!(jobs.iter().all(|(_, j)| j.kind() == JobKind::Merge));
    let (msg_id, consumed) = jobs
        .iter()
        .find(|(_, j)| j.job_id() == &merge_id)
        .expect("merge job not delivered");
    queue
        .ack(JobKind::Merge, msg_id)
        .await
        .expect("Failed to ack");
    queue.clear_dedup(consumed).await.expect("Failed to clear dedup");
}

/// Test duplicate rejection via idempotency keys.
#[tokio::test]
#[ignore = "requires Redis"]
async fn test_duplicate_job_rejected() {
    dotenvy::dotenv().ok();

    let queue = JobQueue::from_env().expect("Failed to create queue");
    queue.init().await.expect("Failed to initialize queue");

    let first = prepare_job("dedup");
    let second = prepare_job("dedup");

    queue
        .enqueue_prepare(first.clone())
        .await
        .expect("Failed to enqueue first");
    let dup = queue.enqueue_prepare(second).await;
    assert!(dup.is_err(), "duplicate enqueue should be rejected");

    // Drain and clean up so reruns start fresh.
    let jobs = queue
        .consume(JobKind::Prepare, "test-consumer", 1000, 10)
        .await
        .expect("Failed to consume");
    for (msg_id, job) in jobs {
        queue
            .ack(JobKind::Prepare, &msg_id)
            .await
            .expect("Failed to ack");
        queue.clear_dedup(&job).await.expect("Failed to clear dedup");
    }
}
