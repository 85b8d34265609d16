use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Small wrapper around stdout/stderr printing for user-facing messages.
/// Colors are enabled only when the target stream is a TTY.
fn is_tty(stream: atty::Stream) -> bool {
    atty::is(stream)
}

pub fn print_warn(msg: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Write a plain line (no prefix) on stdout. Copy lines go through here so
/// scripts can parse them. A closed pipe is returned as an error, not a panic.
pub fn print_user(msg: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", msg)?;
    stdout.flush()
}

/// Print a plain line (no prefix) on stderr.
pub fn print_user_err(msg: &str) {
    eprintln!("{}", msg);
}
