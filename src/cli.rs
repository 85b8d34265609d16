//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Positionals are collected loosely so a wrong count can be reported with
//!   the short usage message and exit status 1 instead of clap's own error.
//! - Positionals may start with '-' (a file named `-draft.txt` is a valid
//!   source), so flags go before them; unknown flags land in the positional
//!   list and fail the count check.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::CopyRequest;

/// The two lines printed to stderr when the positional count is wrong.
pub const USAGE_LINES: [&str; 2] = [
    "Invalid number of arguments. Usage: dropcopy <SOURCE> <DESTINATION>",
    "\t<SOURCE>: path relative to the Dropbox root; <DESTINATION>: full path of the destination file or directory",
];

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy a file or directory out of the local Dropbox folder"
)]
pub struct Args {
    /// SOURCE (relative to the Dropbox root) followed by DESTINATION.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath, allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Use this info.json instead of searching the standard locations.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub info_file: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write diagnostics to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit diagnostics in structured JSON.
    #[arg(long, help = "Emit diagnostics in structured JSON")]
    pub json: bool,

    /// Dry-run: print what would be copied without writing anything.
    #[arg(
        long,
        help = "Show what would be copied, but do not create or modify files"
    )]
    pub dry_run: bool,

    /// Leave copied files with fresh timestamps.
    #[arg(long, help = "Do not carry source access/modification times over")]
    pub no_preserve_times: bool,

    /// Print the info.json locations that would be searched, then exit.
    #[arg(long, help = "Print the info.json candidate locations and exit")]
    pub print_candidates: bool,
}

impl Args {
    /// The copy request, or None when the positional count is not exactly two.
    pub fn request(&self) -> Option<CopyRequest> {
        match self.paths.as_slice() {
            [source, destination] => Some(CopyRequest::new(source.clone(), destination.clone())),
            _ => None,
        }
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Some(info) = &self.info_file {
            cfg.info_override = Some(info.clone());
        }
        if self.json {
            cfg.json = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.no_preserve_times {
            cfg.preserve_times = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
