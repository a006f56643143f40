//! Colored terminal messages for the CLI.

use colored::Colorize;
use std::path::Path;

/// Print `error:` and the message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

/// Print `warning:` and the message to stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

/// Print a green check mark and the message to stdout.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Progress line on stdout, prefixed with an arrow.
pub fn status(msg: &str) {
    println!("{} {}", "→".blue(), msg);
}

/// Dimmed follow-up advice on stderr.
pub fn hint(msg: &str) {
    eprintln!("{} {}", "hint:".dimmed(), msg.dimmed());
}

/// Highlight a file path for inline use in another message.
pub fn path(p: &Path) -> String {
    p.display().to_string().bright_white().to_string()
}

/// Underlined URL for inline use.
pub fn url(u: &str) -> String {
    u.bright_blue().underline().to_string()
}
