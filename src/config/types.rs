//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths::{absolutize, default_info_candidates};
use super::{INFO_OVERRIDE_ENV, LOG_LEVEL_ENV};

/// Program-defined verbosity levels for diagnostics on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Resolution and per-directory progress
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Structured JSON diagnostics
    pub json: bool,
    /// If true, report copies but do not modify the filesystem
    pub dry_run: bool,
    /// Copy access/modification times onto copied files
    pub preserve_times: bool,
    /// Explicit info.json location (replaces the candidate search)
    pub info_override: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Normal,
            log_file: None,
            json: false,
            dry_run: false,
            preserve_times: true,
            info_override: None,
        }
    }
}

impl Config {
    /// Defaults, then `DROPCOPY_LOG_LEVEL` and `DROPCOPY_INFO` from the environment.
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(lvl) = env::var(LOG_LEVEL_ENV).ok().as_deref().and_then(LogLevel::parse) {
            cfg.log_level = lvl;
        }
        cfg.info_override = env::var_os(INFO_OVERRIDE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        cfg
    }

    /// info.json locations to try, in priority order.
    /// An explicit override is the only candidate.
    pub fn info_candidates(&self) -> Vec<PathBuf> {
        match &self.info_override {
            Some(p) => vec![absolutize(p)],
            None => default_info_candidates(),
        }
    }
}
