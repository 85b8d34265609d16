//! Config module.
//! Runtime settings, info.json candidate discovery and sync root resolution.

pub mod info;
pub mod paths;
pub mod resolve;
pub mod types;

pub use info::{parse_info, InfoError};
pub use paths::{default_info_candidates, info_candidates, path_has_symlink_ancestor};
pub use resolve::{find_info_file, load_sync_root, resolve_sync_root, SyncRoot};
pub use types::{Config, LogLevel};

/// Directory the Dropbox client creates under each app data directory.
pub const INFO_DIR_NAME: &str = "Dropbox";
pub const INFO_FILE_NAME: &str = "info.json";

/// Explicit info.json location; replaces the candidate search when set.
pub const INFO_OVERRIDE_ENV: &str = "DROPCOPY_INFO";
/// Default diagnostic verbosity.
pub const LOG_LEVEL_ENV: &str = "DROPCOPY_LOG_LEVEL";
