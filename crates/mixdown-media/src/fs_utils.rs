//! Filesystem staging utilities.

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::error::{MediaError, MediaResult};

/// Ensure `path` exists as a directory, creating it (and any missing
/// parents) if needed.
///
/// Idempotent: an already-existing directory is a no-op. The existence
/// check and the create are not atomic, so a racing create that lands on
/// `AlreadyExists` is treated the same way rather than failing the job.
/// Any other creation failure maps to [`MediaError::Staging`].
pub async fn ensure_dir(path: impl AsRef<Path>) -> MediaResult<()> {
    let path = path.as_ref();

    match fs::create_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(source) if source.kind() == ErrorKind::AlreadyExists => {
            if is_dir(path).await {
                Ok(())
            } else {
                Err(MediaError::Staging {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
        Err(source) => Err(MediaError::Staging {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
