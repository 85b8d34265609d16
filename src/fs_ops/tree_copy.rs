//! Directory tree copy.
//!
//! Iterative with an explicit work stack. Items are pushed in reverse so they
//! pop in the same order a recursive walk would visit them: a directory, then
//! each subdirectory's whole subtree, then the directory's own files.
//! Children are sorted by name, so the event sequence is deterministic.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::file_copy::copy_file;
use super::helpers::io_error_with_help;
use super::{CopyEvent, CopyOptions, CopySummary};

enum Work {
    Dir { src: PathBuf, dest: PathBuf, depth: usize },
    File { src: PathBuf, dest: PathBuf, depth: usize },
}

/// Copy everything under `src` into `dest`, reporting each directory and file.
/// Stops at the first failure, including a failure of `on_event` itself;
/// anything already copied stays in place.
pub fn copy_tree<F>(src: &Path, dest: &Path, opts: &CopyOptions, on_event: &mut F) -> Result<CopySummary>
where
    F: FnMut(&CopyEvent) -> io::Result<()>,
{
    let mut summary = CopySummary::default();
    let mut stack = vec![Work::Dir {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        depth: 0,
    }];

    while let Some(work) = stack.pop() {
        match work {
            Work::Dir { src, dest, depth } => {
                report(on_event, &CopyEvent::directory(&src, &dest, depth))?;
                ensure_dir(&dest, opts)?;
                summary.directories += 1;

                let (dirs, files) = list_children(&src)?;
                for f in files.into_iter().rev() {
                    let Some(target) = f.file_name().map(|name| dest.join(name)) else {
                        continue;
                    };
                    stack.push(Work::File { src: f, dest: target, depth });
                }
                for d in dirs.into_iter().rev() {
                    let Some(target) = d.file_name().map(|name| dest.join(name)) else {
                        continue;
                    };
                    stack.push(Work::Dir { src: d, dest: target, depth: depth + 1 });
                }
            }
            Work::File { src, dest, depth } => {
                let event = copy_file(&src, &dest, depth, opts)?;
                report(on_event, &event)?;
                summary.files += 1;
            }
        }
    }

    Ok(summary)
}

pub(super) fn report<F>(on_event: &mut F, event: &CopyEvent) -> Result<()>
where
    F: FnMut(&CopyEvent) -> io::Result<()>,
{
    on_event(event).with_context(|| format!("failed to report copy of {}", event.source.display()))
}

/// Create `dir` unless it already exists.
fn ensure_dir(dir: &Path, opts: &CopyOptions) -> Result<()> {
    if opts.dry_run || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;
    debug!(path = %dir.display(), "created directory");
    Ok(())
}

/// Immediate subdirectories and files of `dir`, each sorted by name.
/// Symlinks are followed; other entry types are skipped with a warning.
fn list_children(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let at = e.path().unwrap_or(dir).to_path_buf();
                return Err(io_error_with_help("read directory entry", &at)(e.into()));
            }
        };
        let ft = entry.file_type();
        if ft.is_dir() {
            dirs.push(entry.into_path());
        } else if ft.is_file() {
            files.push(entry.into_path());
        } else {
            warn!(path = %entry.path().display(), "skipping entry that is neither a file nor a directory");
        }
    }

    Ok((dirs, files))
}
