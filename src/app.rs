//! Application orchestrator.
//! Merges environment and CLI settings, initializes logging, resolves the
//! Dropbox root and runs the copy. Failures are turned into exit statuses
//! here and nowhere else.

use dropcopy::cli::{Args, USAGE_LINES};
use dropcopy::errors::{EXIT_UNEXPECTED, EXIT_USAGE};
use dropcopy::output as out;
use dropcopy::{copy_from_sync_root, exit_code, Config, CopyOptions, DropCopyError};
use tracing::debug;

use crate::logging::init_tracing;

/// Run the CLI application and return the process exit status.
pub fn run(args: Args) -> i32 {
    let mut cfg = Config::from_env();
    args.apply_overrides(&mut cfg);

    // Handle --print-candidates before logging init
    if args.print_candidates {
        for (i, c) in cfg.info_candidates().iter().enumerate() {
            let mark = if c.is_file() { "found" } else { "missing" };
            if let Err(e) = out::print_user(&format!("{}. {} ({})", i + 1, c.display(), mark)) {
                out::print_error(&format!("Failed to write to stdout: {e}"));
                return EXIT_UNEXPECTED;
            }
        }
        return 0;
    }

    let Some(request) = args.request() else {
        for line in USAGE_LINES {
            out::print_user_err(line);
        }
        return EXIT_USAGE;
    };

    // Hold the guard until we return so the file appender flushes.
    let _guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return EXIT_UNEXPECTED;
        }
    };

    debug!(?args, ?cfg, "starting dropcopy");

    let candidates = cfg.info_candidates();
    let opts = CopyOptions::from(&cfg);
    let result = copy_from_sync_root(&request, &candidates, &opts, |event| out::print_user(&event.to_string()));

    match result {
        Ok(_) => 0,
        Err(e) => {
            let code = exit_code(&e);
            match e.downcast_ref::<DropCopyError>() {
                Some(DropCopyError::RootNotFound { searched }) => {
                    debug!(code, kind = "root_not_found", searched = searched.len(), "no info.json found")
                }
                Some(DropCopyError::ConfigParse { path, .. }) => {
                    debug!(code, kind = "config_parse", path = %path.display(), "info.json unusable")
                }
                Some(DropCopyError::InvalidParameters(inner)) => {
                    debug!(code, kind = "invalid_parameters", error = %inner, "request rejected")
                }
                None => debug!(code, kind = "unexpected", error = ?e, "copy failed"),
            }

            if code == EXIT_UNEXPECTED {
                // Full chain, one cause per line.
                out::print_user_err(&format!("{e:?}"));
            } else {
                out::print_error(&e.to_string());
            }
            code
        }
    }
}
