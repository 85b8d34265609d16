//! Core library for `dropcopy`.
//!
//! Finds the local Dropbox folder through the client's info.json, then copies
//! a file or a whole directory tree from inside it to a destination.
//! Every operation returns a Result; only the binary turns failures into exit
//! statuses.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use config::{Config, LogLevel, SyncRoot, resolve_sync_root};
pub use errors::{DropCopyError, InvalidParameters, exit_code};
pub use fs_ops::{CopyEvent, CopyKind, CopyOptions, CopySummary, PathKind, classify, copy_entry};

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// One invocation: a path relative to the sync root and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source_relative: PathBuf,
    pub destination: PathBuf,
}

impl CopyRequest {
    pub fn new(source_relative: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_relative: source_relative.into(),
            destination: destination.into(),
        }
    }
}

/// Resolve the sync root from `candidates`, then copy the request's source to
/// its destination. Resolution failures return before anything is written.
pub fn copy_from_sync_root<F>(
    request: &CopyRequest,
    candidates: &[PathBuf],
    opts: &CopyOptions,
    on_event: F,
) -> Result<CopySummary>
where
    F: FnMut(&CopyEvent) -> io::Result<()>,
{
    let root = resolve_sync_root(candidates)?;
    let source = root.join(&request.source_relative);
    let summary = copy_entry(&source, &request.destination, opts, on_event)?;
    info!(
        source = %source.display(),
        dest = %request.destination.display(),
        files = summary.files,
        directories = summary.directories,
        dry_run = opts.dry_run,
        "Copy completed"
    );
    Ok(summary)
}
