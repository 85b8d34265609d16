//! Single-file copy.
//! - Creates missing parent directories of the destination.
//! - Copies contents and permissions into a hidden temp file beside the
//!   destination, then renames it over the destination.
//! - Optionally carries the source timestamps over.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::atomic::replace_with;
use super::helpers::io_error_with_help;
use super::metadata::preserve_times;
use super::{util, CopyEvent, CopyOptions};

/// Copy `src` to exactly `dest`, overwriting it. Returns the event to report.
pub fn copy_file(src: &Path, dest: &Path, depth: usize, opts: &CopyOptions) -> Result<CopyEvent> {
    let event = CopyEvent::file(src, dest, depth);
    if opts.dry_run {
        return Ok(event);
    }

    let dest_dir = util::parent_dir(dest);
    if !dest_dir.is_dir() {
        fs::create_dir_all(dest_dir)
            .map_err(io_error_with_help("create destination directory", dest_dir))?;
        debug!(path = %dest_dir.display(), "created destination directory");
    }

    let tmp = util::unique_temp_path(dest_dir);
    let op = format!("copy '{}' to", src.display());
    if let Err(e) = fs::copy(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help(&op, dest)(e));
    }

    if opts.preserve_times {
        match fs::metadata(src) {
            Ok(meta) => preserve_times(&tmp, &meta),
            Err(e) => debug!(path = %src.display(), error = %e, "cannot stat source for timestamps"),
        }
    }

    if let Err(e) = replace_with(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn creates_missing_ancestors() {
        let td = assert_fs::TempDir::new().unwrap();
        let src = td.child("a.txt");
        src.write_str("alpha").unwrap();
        let dest = td.child("x/y/z/a.txt");

        let ev = copy_file(src.path(), dest.path(), 0, &CopyOptions::default()).unwrap();
        assert_eq!(fs::read_to_string(dest.path()).unwrap(), "alpha");
        assert_eq!(ev.destination, dest.path());
        assert_eq!(ev.depth, 0);
    }

    #[test]
    fn overwrites_and_leaves_no_temp_files() {
        let td = assert_fs::TempDir::new().unwrap();
        let src = td.child("src.txt");
        src.write_str("new").unwrap();
        let out = td.child("out");
        let dest = out.child("dst.txt");
        dest.write_str("old contents that are longer").unwrap();

        copy_file(src.path(), dest.path(), 2, &CopyOptions::default()).unwrap();
        assert_eq!(fs::read_to_string(dest.path()).unwrap(), "new");

        let names: Vec<_> = fs::read_dir(out.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("dst.txt")]);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let td = assert_fs::TempDir::new().unwrap();
        let src = td.child("a.txt");
        src.write_str("alpha").unwrap();
        let dest = td.child("new/a.txt");
        let opts = CopyOptions {
            dry_run: true,
            ..CopyOptions::default()
        };

        let ev = copy_file(src.path(), dest.path(), 0, &opts).unwrap();
        assert_eq!(ev.to_string(), format!("{} => {}", src.path().display(), dest.path().display()));
        assert!(!td.child("new").path().exists());
    }

    #[test]
    fn missing_source_reports_paths() {
        let td = assert_fs::TempDir::new().unwrap();
        let dest = td.child("d.txt");
        let err = copy_file(td.child("gone.txt").path(), dest.path(), 0, &CopyOptions::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gone.txt"), "msg was: {msg}");
        assert!(msg.contains("d.txt"), "msg was: {msg}");
        assert!(!dest.path().exists());
    }
}
