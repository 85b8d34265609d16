//! I/O helper utilities.
//!
//! Provides a small adapter that enriches io::Error with the failed operation,
//! the path involved and a platform-aware hint, for use with map_err:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
                libc::ENOENT => Some("path not found; it may have been removed during the copy"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EDQUOT => Some("disk quota exceeded"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::EISDIR => Some("a directory is in the way of a file"),
                libc::ENOTDIR => Some("a file is in the way of a directory"),
                libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
                libc::ENAMETOOLONG => Some("filename or path too long; the tree may be too deep"),
                libc::EMFILE => Some("process file descriptor limit reached"),
                _ => None,
            };
            if let Some(hint) = hint {
                msg.push_str(" (");
                msg.push_str(hint);
                msg.push(')');
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),             // ERROR_ACCESS_DENIED
                2 | 3 => Some("path not found"),                           // FILE/PATH NOT FOUND
                32 => Some("sharing violation; file is in use"),           // ERROR_SHARING_VIOLATION
                112 => Some("insufficient disk space"),                    // ERROR_DISK_FULL
                206 => Some("filename or path too long (MAX_PATH exceeded)"), // ERROR_FILENAME_EXCED_RANGE
                _ => None,
            };
            if let Some(hint) = hint {
                msg.push_str(" (");
                msg.push_str(hint);
                msg.push(')');
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        let hint = match e.kind() {
            io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
            io::ErrorKind::NotFound => Some("path not found"),
            io::ErrorKind::AlreadyExists => Some("already exists"),
            _ => None,
        };
        if let Some(hint) = hint {
            msg.push_str(" (");
            msg.push_str(hint);
            msg.push(')');
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
