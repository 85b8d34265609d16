use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::DropCopyError;

use super::file_copy::copy_file;
use super::plan::{plan_copy, CopyPlan};
use super::tree_copy::{copy_tree, report};
use super::{CopyEvent, CopyOptions, CopySummary};

/// Top-level dispatcher for one copy request.
/// - Validates the source/destination combination before touching anything.
/// - Delegates to the file or tree copier, passing each event to `on_event`.
/// - An error from `on_event` aborts the copy.
pub fn copy_entry<F>(source: &Path, destination: &Path, opts: &CopyOptions, mut on_event: F) -> Result<CopySummary>
where
    F: FnMut(&CopyEvent) -> io::Result<()>,
{
    let plan = plan_copy(source, destination).map_err(DropCopyError::from)?;
    debug!(?plan, dry_run = opts.dry_run, "dispatch copy_entry");

    match plan {
        CopyPlan::File { source, destination } => {
            let event = copy_file(&source, &destination, 0, opts)?;
            report(&mut on_event, &event)?;
            Ok(CopySummary { files: 1, directories: 0 })
        }
        CopyPlan::Tree { source, destination } => copy_tree(&source, &destination, opts, &mut on_event),
    }
}
