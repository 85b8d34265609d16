//! Atomic rename helper.
//! - Renames a finished temp file over the destination (last writer wins).
//! - On Windows, removes an existing destination first.
//! - On Unix, best-effort fsync of the destination directory after rename.

use anyhow::Result;
use std::fs;
use std::path::Path;

use super::helpers::io_error_with_help;

pub(super) fn replace_with(tmp: &Path, dst: &Path) -> Result<()> {
    #[cfg(windows)]
    {
        if dst.is_file() {
            if let Err(e) = fs::remove_file(dst) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    return Err(io_error_with_help("remove existing destination", dst)(e));
                }
            }
        }
    }

    let op = format!("rename '{}' over", tmp.display());
    fs::rename(tmp, dst).map_err(io_error_with_help(&op, dst))?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors; the rename itself succeeded.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
