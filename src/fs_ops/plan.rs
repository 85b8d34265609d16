//! Source/destination validation.
//!
//! | source        | destination   | plan                                  |
//! |---------------|---------------|---------------------------------------|
//! | DirectoryLike | File          | rejected                              |
//! | File          | DirectoryLike | file copy to `destination/<name>`     |
//! | File          | File          | file copy onto `destination`          |
//! | DirectoryLike | DirectoryLike | tree copy into `destination`          |
//!
//! A source that does not exist is rejected whatever the destination is.
//! Nothing here touches the filesystem beyond stat calls.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::InvalidParameters;

use super::classify::{classify, PathKind};

/// What a validated request will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyPlan {
    File { source: PathBuf, destination: PathBuf },
    Tree { source: PathBuf, destination: PathBuf },
}

/// Validate the endpoints and decide between a file copy and a tree copy.
pub fn plan_copy(source: &Path, destination: &Path) -> Result<CopyPlan, InvalidParameters> {
    if !source.exists() {
        return Err(InvalidParameters::SourceMissing(source.to_path_buf()));
    }

    match (classify(source), classify(destination)) {
        (PathKind::DirectoryLike, PathKind::File) => Err(InvalidParameters::DirectoryOntoFile {
            dir: source.to_path_buf(),
            file: destination.to_path_buf(),
        }),
        (PathKind::File, PathKind::DirectoryLike) => {
            let name = source
                .file_name()
                .ok_or_else(|| InvalidParameters::SourceMissing(source.to_path_buf()))?;
            Ok(CopyPlan::File {
                source: source.to_path_buf(),
                destination: destination.join(name),
            })
        }
        (PathKind::File, PathKind::File) => Ok(CopyPlan::File {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        }),
        (PathKind::DirectoryLike, PathKind::DirectoryLike) => {
            ensure_not_nested(source, destination)?;
            Ok(CopyPlan::Tree {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
            })
        }
    }
}

/// A tree copied into its own subtree would keep finding the copies it made.
fn ensure_not_nested(source: &Path, destination: &Path) -> Result<(), InvalidParameters> {
    let src_real = fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
    let dst_real = canonicalize_existing_prefix(destination);
    if dst_real != src_real && dst_real.starts_with(&src_real) {
        return Err(InvalidParameters::DestinationInsideSource {
            source_dir: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor of `path` and re-append the rest.
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut tail = Vec::new();
    let mut cur = path;
    loop {
        if let Ok(real) = fs::canonicalize(cur) {
            return tail.iter().rev().fold(real, |acc: PathBuf, part| acc.join(part));
        }
        match (cur.parent(), cur.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                cur = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
            }
            _ => return path.to_path_buf(),
        }
    }
}
