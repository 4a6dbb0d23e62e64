//! Terminal output helpers
//!
//! All diagnostics go to stderr so that stdout stays reserved for the
//! generated document.

use colored::Colorize;
use std::fmt::Display;

/// Print an error to stderr with the standard prefix
pub fn print_error(err: &impl Display) {
    eprintln!("{} {}", "error:".red().bold(), err);
}

/// Print a non-fatal warning to stderr
pub fn print_warning(msg: impl Display) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}
