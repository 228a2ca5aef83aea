//! Shared CLI helpers — path expansion and output formatting.

use std::error::Error;
use std::path::PathBuf;

use colored::Colorize;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Print a titled block of source text to stdout.
pub fn print_section(title: &str, body: &str) {
    println!();
    println!("{}", format!("{title}:").cyan().bold());
    println!("{}", body.trim_matches('\n'));
}

/// Print an error and its cause chain to stderr.
pub fn print_error(context: &str, error: &(dyn Error + 'static)) {
    eprintln!();
    eprintln!("{} {}: {}", "✗".red(), context.bold(), error);
    for cause in error_chain(error).skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

/// `error` followed by each of its sources.
fn error_chain<'a>(error: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(error), |&e| e.source())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
