//! Job handlers binding queue envelopes to the ffmpeg invokers.
//!
//! Handlers are pure adapters: validate the payload, compute derived
//! paths, delegate to the invoker, and let the outcome propagate. They
//! never swallow errors; the executor decides whether a failure is
//! redelivered or dead-lettered.

use validator::Validate;

use mixdown_media::{concat_to_mp3, ensure_dir, normalize_to_mp3};
use mixdown_queue::{MergeJob, PrepareJob};

use crate::error::{WorkerError, WorkerResult};
use crate::logging::JobLogger;

/// Handle a prepare job: normalize the source asset into the canonical
/// format at `temp_dir/output_file_name.mp3`.
pub async fn handle_prepare(job: &PrepareJob) -> WorkerResult<()> {
    let logger = JobLogger::new(&job.job_id, "prepare");
    let payload = &job.payload;

    payload
        .validate()
        .map_err(|e| WorkerError::invalid_payload(e.to_string()))?;

    let output = payload.output_path();
    if payload.original_file_path == output {
        return Err(WorkerError::invalid_payload(format!(
            "source and output resolve to the same path: {}",
            output.display()
        )));
    }

    logger.log_start(&format!("Normalizing {}", payload.source_label()));
    normalize_to_mp3(&payload.original_file_path, &output).await?;
    logger.log_completion(&format!("Converted {}", payload.source_label()));

    Ok(())
}

/// Handle a merge job: concatenate the prepared inputs, in listed order,
/// into `output_dir/output_file_name`.
///
/// The concat technique needs a scratch directory for its list file.
/// Staging runs before ffmpeg, and the merge does not proceed if staging
/// fails.
pub async fn handle_merge(job: &MergeJob) -> WorkerResult<()> {
    let logger = JobLogger::new(&job.job_id, "merge");
    let payload = &job.payload;

    payload
        .validate()
        .map_err(|e| WorkerError::invalid_payload(e.to_string()))?;

    let scratch = payload.scratch_dir();
    ensure_dir(&scratch).await?;

    logger.log_start(&format!(
        "Merging {} files into {}",
        payload.files.len(),
        payload.output_file_name
    ));
    concat_to_mp3(&payload.files, payload.output_path(), &scratch).await?;
    logger.log_completion(&format!("{} audio merge completed", payload.output_file_name));

    Ok(())
}
