//! Copy engine: classification, validation, file and tree copies.

mod atomic;
mod classify;
mod entry;
mod file_copy;
mod helpers;
mod metadata;
mod plan;
mod tree_copy;
mod util;

pub use classify::{classify, PathKind};
pub use entry::copy_entry;
pub use file_copy::copy_file;
pub use helpers::io_error_with_help;
pub use plan::{plan_copy, CopyPlan};
pub use tree_copy::copy_tree;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Knobs for a copy run.
#[derive(Debug, Clone, Copy)]
pub struct CopyOptions {
    /// Report every copy but leave the filesystem untouched.
    pub dry_run: bool,
    /// Carry access/modification times over to copied files.
    pub preserve_times: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            preserve_times: true,
        }
    }
}

impl From<&Config> for CopyOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            dry_run: cfg.dry_run,
            preserve_times: cfg.preserve_times,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    File,
    Directory,
}

/// One source/destination pairing visited by the engine.
///
/// Displays as the user-facing log line: `depth` tabs, then `source => destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEvent {
    pub kind: CopyKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub depth: usize,
}

impl CopyEvent {
    pub fn file(source: &Path, destination: &Path, depth: usize) -> Self {
        Self {
            kind: CopyKind::File,
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            depth,
        }
    }

    pub fn directory(source: &Path, destination: &Path, depth: usize) -> Self {
        Self {
            kind: CopyKind::Directory,
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            depth,
        }
    }
}

impl fmt::Display for CopyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str("\t")?;
        }
        write!(f, "{} => {}", self.source.display(), self.destination.display())
    }
}

/// Counts of what a run copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub files: usize,
    pub directories: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_line_is_indented_by_depth() {
        let ev = CopyEvent::file(Path::new("/s/b/c.txt"), Path::new("/d/b/c.txt"), 2);
        assert_eq!(ev.to_string(), "\t\t/s/b/c.txt => /d/b/c.txt");

        let top = CopyEvent::directory(Path::new("/s"), Path::new("/d"), 0);
        assert_eq!(top.to_string(), "/s => /d");
    }
}
