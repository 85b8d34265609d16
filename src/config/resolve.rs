//! Sync root resolution.
//! - Walk the candidate info.json paths in order; the first regular file wins.
//! - Parse it into the root directory of the Dropbox folder.
//!
//! Nothing here writes to the filesystem, so a failure leaves no trace.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::DropCopyError;

use super::info::parse_info;

/// Root of the local Dropbox folder and the info.json it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRoot {
    pub root: PathBuf,
    pub info_path: PathBuf,
}

impl SyncRoot {
    /// Join a caller-supplied relative path onto the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// First candidate that exists as a regular file.
pub fn find_info_file(candidates: &[PathBuf]) -> Result<PathBuf> {
    for c in candidates {
        if c.is_file() {
            debug!(path = %c.display(), "found info.json");
            return Ok(c.clone());
        }
        debug!(path = %c.display(), "no info.json here");
    }
    Err(DropCopyError::RootNotFound {
        searched: candidates.to_vec(),
    }
    .into())
}

/// Read and parse the info.json at `path`.
pub fn load_sync_root(path: &Path) -> Result<SyncRoot> {
    let content = fs::read_to_string(path).map_err(|e| DropCopyError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let root = parse_info(&content).map_err(|e| DropCopyError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(SyncRoot {
        root,
        info_path: path.to_path_buf(),
    })
}

/// Resolve the sync root from an ordered candidate list.
pub fn resolve_sync_root(candidates: &[PathBuf]) -> Result<SyncRoot> {
    let info_path = find_info_file(candidates)?;
    let root = load_sync_root(&info_path)?;
    info!(root = %root.root.display(), info = %info_path.display(), "Resolved Dropbox root");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::exit_code;
    use assert_fs::prelude::*;

    fn info_json(path: &Path) -> String {
        serde_json::json!({ "personal": { "path": path } }).to_string()
    }

    #[test]
    fn first_existing_candidate_wins() {
        let td = assert_fs::TempDir::new().unwrap();
        let first = td.child("roaming/Dropbox/info.json");
        let second = td.child("local/Dropbox/info.json");
        first.write_str(&info_json(Path::new("/first"))).unwrap();
        second.write_str(&info_json(Path::new("/second"))).unwrap();

        let candidates = vec![
            td.child("missing/Dropbox/info.json").path().to_path_buf(),
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ];
        let root = resolve_sync_root(&candidates).unwrap();
        assert_eq!(root.root, PathBuf::from("/first"));
        assert_eq!(root.info_path, first.path());
    }

    #[test]
    fn directory_candidate_is_skipped() {
        let td = assert_fs::TempDir::new().unwrap();
        let dir = td.child("a/Dropbox/info.json");
        dir.create_dir_all().unwrap();
        let file = td.child("b/Dropbox/info.json");
        file.write_str(&info_json(Path::new("/b"))).unwrap();

        let root = resolve_sync_root(&[dir.path().to_path_buf(), file.path().to_path_buf()]).unwrap();
        assert_eq!(root.root, PathBuf::from("/b"));
    }

    #[test]
    fn no_candidate_is_root_not_found() {
        let td = assert_fs::TempDir::new().unwrap();
        let err = resolve_sync_root(&[td.child("nope.json").path().to_path_buf()]).unwrap_err();
        assert_eq!(exit_code(&err), 100);
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn unparsable_info_is_config_parse() {
        let td = assert_fs::TempDir::new().unwrap();
        let f = td.child("info.json");
        f.write_str("{ broken").unwrap();
        let err = resolve_sync_root(&[f.path().to_path_buf()]).unwrap_err();
        assert_eq!(exit_code(&err), 101);
    }

    #[test]
    fn join_appends_relative_source() {
        let root = SyncRoot {
            root: PathBuf::from("/home/u/Sync"),
            info_path: PathBuf::from("/x/info.json"),
        };
        assert_eq!(
            root.join("reports/jan.csv"),
            PathBuf::from("/home/u/Sync/reports/jan.csv")
        );
    }
}
