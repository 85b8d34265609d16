use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Hidden sibling path used while a file copy is in flight.
pub(super) fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dst_dir.join(format!(".dropcopy.{}.{}.tmp", pid, nanos))
}

/// Directory that will hold `dest`; a bare file name lives in the current directory.
pub(super) fn parent_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = File::open(dir)?;
    f.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_hidden_sibling() {
        let p = unique_temp_path(Path::new("/out"));
        assert_eq!(p.parent(), Some(Path::new("/out")));
        let name = p.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".dropcopy."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn bare_name_parent_is_cwd() {
        assert_eq!(parent_dir(Path::new("out.txt")), Path::new("."));
        assert_eq!(parent_dir(Path::new("a/out.txt")), Path::new("a"));
    }
}
