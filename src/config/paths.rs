//! Candidate info.json locations and symlink checks.
//! Builds the ordered list of places the Dropbox client may have written its
//! info.json, and detects symlinked ancestors for log file safety.

use dirs::{config_dir, data_local_dir, home_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{INFO_DIR_NAME, INFO_FILE_NAME};

/// Machine-wide application data directory.
fn shared_data_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        env::var_os("PROGRAMDATA").map(PathBuf::from)
    } else {
        Some(PathBuf::from("/etc"))
    }
}

/// Application data directories in priority order:
/// per-user roaming, machine-wide, per-user local.
pub fn app_data_dirs() -> Vec<PathBuf> {
    [config_dir(), shared_data_dir(), data_local_dir()]
        .into_iter()
        .flatten()
        .collect()
}

/// Join each base with `Dropbox/info.json`, keeping order and dropping duplicates.
pub fn info_candidates(bases: &[PathBuf]) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::with_capacity(bases.len());
    for base in bases {
        let candidate = base.join(INFO_DIR_NAME).join(INFO_FILE_NAME);
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Ordered info.json candidates for this machine: the app data directories,
/// followed (off Windows) by the desktop client's `~/.dropbox/info.json`.
pub fn default_info_candidates() -> Vec<PathBuf> {
    let mut candidates = info_candidates(&app_data_dirs());
    if !cfg!(windows)
        && let Some(home) = home_dir()
    {
        let dotdir = home.join(".dropbox").join(INFO_FILE_NAME);
        if !candidates.contains(&dotdir) {
            candidates.push(dotdir);
        }
    }
    candidates
}

/// Resolve a relative path against the current directory (best-effort).
pub fn absolutize(p: &Path) -> PathBuf {
    if p.is_absolute() {
        return p.to_path_buf();
    }
    env::current_dir().map(|cwd| cwd.join(p)).unwrap_or_else(|_| p.to_path_buf())
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_keep_base_order() {
        let bases = vec![
            PathBuf::from("/roaming"),
            PathBuf::from("/shared"),
            PathBuf::from("/local"),
        ];
        let c = info_candidates(&bases);
        assert_eq!(
            c,
            vec![
                PathBuf::from("/roaming/Dropbox/info.json"),
                PathBuf::from("/shared/Dropbox/info.json"),
                PathBuf::from("/local/Dropbox/info.json"),
            ]
        );
    }

    #[test]
    fn candidates_drop_duplicates_keeping_first() {
        // macOS: config_dir and data_local_dir are the same directory
        let bases = vec![
            PathBuf::from("/Users/u/Library/Application Support"),
            PathBuf::from("/etc"),
            PathBuf::from("/Users/u/Library/Application Support"),
        ];
        let c = info_candidates(&bases);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], PathBuf::from("/Users/u/Library/Application Support/Dropbox/info.json"));
        assert_eq!(c[1], PathBuf::from("/etc/Dropbox/info.json"));
    }

    #[test]
    fn default_candidates_all_name_info_json() {
        let c = default_info_candidates();
        assert!(!c.is_empty());
        assert!(c.iter().all(|p| p.ends_with(INFO_FILE_NAME)));
    }

    #[test]
    fn absolutize_keeps_absolute_paths() {
        let abs = env::current_dir().unwrap().join("info.json");
        assert_eq!(absolutize(&abs), abs);
        assert_eq!(absolutize(Path::new("info.json")), abs);
    }

    #[cfg(unix)]
    #[test]
    fn detects_symlinked_ancestor() {
        let td = tempfile::tempdir().unwrap();
        let real = td.path().join("real");
        fs::create_dir_all(&real).unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(path_has_symlink_ancestor(&link.join("x.log")).unwrap());
        assert!(!path_has_symlink_ancestor(&real.join("x.log")).unwrap());
    }
}
