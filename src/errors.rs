//! Typed error definitions for dropcopy.
//! Provides the well-known failure modes and the process exit status for each.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a wrong number of positional arguments.
pub const EXIT_USAGE: i32 = 1;
/// Exit status for any failure that is not one of the known variants.
pub const EXIT_UNEXPECTED: i32 = 1337;

#[derive(Debug, Error)]
pub enum DropCopyError {
    #[error(
        "Dropbox v2.8 or later must be installed: no info.json found (searched {})",
        .searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    RootNotFound { searched: Vec<PathBuf> },

    #[error("Unable to parse {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error(transparent)]
    InvalidParameters(#[from] InvalidParameters),
}

/// Disallowed source/destination combinations, detected before any mutation.
#[derive(Debug, Error)]
pub enum InvalidParameters {
    #[error("Source does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Cannot copy directory {} onto file {}", .dir.display(), .file.display())]
    DirectoryOntoFile { dir: PathBuf, file: PathBuf },

    #[error(
        "Cannot copy directory {} into its own subtree {}",
        .source_dir.display(),
        .destination.display()
    )]
    DestinationInsideSource { source_dir: PathBuf, destination: PathBuf },
}

impl DropCopyError {
    /// Process exit status reported for this failure.
    pub fn code(&self) -> i32 {
        match self {
            DropCopyError::RootNotFound { .. } => 100,
            DropCopyError::ConfigParse { .. } => 101,
            DropCopyError::InvalidParameters(_) => 102,
        }
    }
}

/// Exit status for any error bubbling out of a run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DropCopyError>()
        .map(DropCopyError::code)
        .unwrap_or(EXIT_UNEXPECTED)
}
