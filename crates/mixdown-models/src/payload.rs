//! Prepare/merge payloads and their derived paths.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::encoding::CANONICAL_EXTENSION;

/// Payload for a prepare job: normalize one source asset into the
/// canonical format inside a caller-owned scratch area.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct PreparePayload {
    /// Scratch area the normalized output is written into; must be writable
    pub temp_dir: PathBuf,

    /// Source asset; must exist and be readable
    pub original_file_path: PathBuf,

    /// Logical output name, extension excluded
    #[validate(length(min = 1))]
    pub output_file_name: String,
}

impl PreparePayload {
    /// Final artifact path: `temp_dir/output_file_name.mp3`.
    pub fn output_path(&self) -> PathBuf {
        self.temp_dir
            .join(format!("{}.{}", self.output_file_name, CANONICAL_EXTENSION))
    }

    /// Short label for logging, derived from the source file name.
    pub fn source_label(&self) -> String {
        self.original_file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.original_file_path.display().to_string())
    }
}

/// Payload for a merge job: concatenate already-prepared files, in listed
/// order, into one output.
///
/// Every path in `files` must exist at invocation time; existence is a
/// producer contract, an unreadable input surfaces as a tool failure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct MergePayload {
    /// Destination directory for the merged artifact
    pub output_dir: PathBuf,

    /// Final artifact file name, extension included
    #[validate(length(min = 1))]
    pub output_file_name: String,

    /// Ordered inputs; order determines concatenation order
    #[validate(length(min = 1))]
    pub files: Vec<PathBuf>,
}

impl MergePayload {
    /// Final artifact path: `output_dir/output_file_name`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }

    /// Scratch directory required by the concat technique: `output_dir/temp`.
    pub fn scratch_dir(&self) -> PathBuf {
        self.output_dir.join("temp")
    }
}
