//! Job executor.
//!
//! One serial consumption loop per job kind: the next job of a kind is
//! not dispatched until the previous handler future settles, which
//! enforces that kind's concurrency cap of 1. The prepare and merge
//! loops run as independent tasks, so one job of each kind may be active
//! at the same time.
//!
//! A hung ffmpeg child blocks its kind's slot indefinitely; there is no
//! timeout or cancellation here, recovery is an operator action.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use uuid::Uuid;

use mixdown_models::JobKind;
use mixdown_queue::{JobQueue, QueueJob};

use crate::config::WorkerConfig;
use crate::error::WorkerResult;
use crate::handlers::{handle_merge, handle_prepare};

/// Job executor that processes jobs from the queue.
pub struct JobExecutor {
    config: WorkerConfig,
    queue: Arc<JobQueue>,
    shutdown: watch::Sender<bool>,
    consumer_name: String,
}

impl JobExecutor {
    /// Create a new job executor.
    pub fn new(config: WorkerConfig, queue: JobQueue) -> Self {
        let (shutdown, _) = watch::channel(false);
        let consumer_name = format!("worker-{}", Uuid::new_v4());

        Self {
            config,
            queue: Arc::new(queue),
            shutdown,
            consumer_name,
        }
    }

    /// Start one consumption loop per job kind and run until shutdown.
    pub async fn run(&self) -> WorkerResult<()> {
        info!("Starting job executor '{}'", self.consumer_name);

        self.queue.init().await?;

        let mut loops = JoinSet::new();
        for kind in JobKind::ALL {
            let queue = Arc::clone(&self.queue);
            let config = self.config.clone();
            let consumer_name = format!("{}-{}", self.consumer_name, kind);
            let shutdown_rx = self.shutdown.subscribe();

            loops.spawn(async move {
                run_kind_loop(kind, queue, config, consumer_name, shutdown_rx).await;
            });
        }

        while let Some(joined) = loops.join_next().await {
            if let Err(e) = joined {
                error!("Kind loop aborted: {}", e);
            }
        }

        info!("Job executor stopped");
        Ok(())
    }

    /// Signal shutdown.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }
}

/// Serial consumption loop for one job kind.
///
/// In-flight work is never interrupted on shutdown; the loop drains the
/// current job and exits before the next consume.
async fn run_kind_loop(
    kind: JobKind,
    queue: Arc<JobQueue>,
    config: WorkerConfig,
    consumer_name: String,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    info!(kind = %kind, "Starting consumption loop");

    let mut last_claim = tokio::time::Instant::now();

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        // Crash recovery: periodically adopt pending jobs whose worker died.
        if last_claim.elapsed() >= config.claim_interval {
            last_claim = tokio::time::Instant::now();
            match queue
                .claim_pending(
                    kind,
                    &consumer_name,
                    config.claim_min_idle.as_millis() as u64,
                    1,
                )
                .await
            {
                Ok(jobs) => {
                    for (message_id, job) in jobs {
                        execute_job(kind, &queue, &message_id, job).await;
                    }
                }
                Err(e) => warn!(kind = %kind, "Failed to claim pending jobs: {}", e),
            }
        }

        let consumed = tokio::select! {
            _ = shutdown_rx.changed() => continue,
            result = queue.consume(
                kind,
                &consumer_name,
                config.poll_block.as_millis() as u64,
                1,
            ) => result,
        };

        match consumed {
            Ok(jobs) => {
                for (message_id, job) in jobs {
                    // Runs to completion before the next consume; this is
                    // the per-kind concurrency cap.
                    execute_job(kind, &queue, &message_id, job).await;
                }
            }
            Err(e) => {
                error!(kind = %kind, "Error consuming jobs: {}", e);
                // Back off on error
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }

    info!(kind = %kind, "Consumption loop stopped");
}

/// Execute a single job with retry and DLQ handling.
async fn execute_job(kind: JobKind, queue: &JobQueue, message_id: &str, job: QueueJob) {
    let job_id = job.job_id().to_string();
    info!(kind = %kind, "Executing job {}", job_id);

    match process_job(&job).await {
        Ok(()) => {
            info!("Job {} completed successfully", job_id);
            if let Err(e) = queue.ack(kind, message_id).await {
                error!("Failed to ack job {}: {}", job_id, e);
            }
            // Clear dedup key so the same job can be re-enqueued later
            if let Err(e) = queue.clear_dedup(&job).await {
                warn!("Failed to clear dedup key for job {}: {}", job_id, e);
            }
        }
        Err(e) => {
            error!("Job {} failed: {}", job_id, e);

            let retry_count = queue
                .increment_retry(kind, message_id)
                .await
                .unwrap_or(u32::MAX);
            let max_retries = queue.max_retries();

            if e.is_permanent() || retry_count >= max_retries {
                warn!("Job {} will not be retried, moving to DLQ", job_id);
                if let Err(dlq_err) = queue.dlq(kind, message_id, &job, &e.to_string()).await {
                    error!("Failed to move job {} to DLQ: {}", job_id, dlq_err);
                }
                if let Err(e) = queue.clear_dedup(&job).await {
                    warn!("Failed to clear dedup key for job {}: {}", job_id, e);
                }
            } else {
                info!(
                    "Job {} will be retried (attempt {}/{})",
                    job_id, retry_count, max_retries
                );
                // Left pending; redelivered by the claim pass once idle.
            }
        }
    }
}

/// Dispatch to the handler matching the job kind.
async fn process_job(job: &QueueJob) -> WorkerResult<()> {
    match job {
        QueueJob::Prepare(j) => handle_prepare(j).await,
        QueueJob::Merge(j) => handle_merge(j).await,
    }
}
