//! Message formatting and printing utilities.
//!
//! Progress messages go to stdout with an `[Info]` / `[Warn]` prefix, errors
//! to stderr with `[Error]`. Colors follow `colored`'s `NO_COLOR` handling.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of failed strings listed without `-v`.
const MAX_FAILURES_DISPLAY: usize = 5;

pub fn info(message: &str) {
    info_to(message, &mut io::stdout().lock());
}

pub fn info_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "[Info]".green(), message);
}

pub fn warn(message: &str) {
    warn_to(message, &mut io::stdout().lock());
}

pub fn warn_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "[Warn]".yellow(), message);
}

pub fn error(message: &str) {
    error_to(message, &mut io::stderr().lock());
}

pub fn error_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "[Error]".bold().red(), message);
}

/// Print the outcome of a run: failed strings, then the counts.
pub fn print_summary(summary: &RunSummary, verbose: bool) {
    print_failures_to(summary, verbose, &mut io::stderr().lock());
    print_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_failures_to<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    let failures = &summary.stats.failures;
    let shown = if verbose {
        failures.len()
    } else {
        failures.len().min(MAX_FAILURES_DISPLAY)
    };

    for failure in &failures[..shown] {
        error_to(
            &format!(
                "String {} was not translated: {}",
                failure.position, failure.error
            ),
            writer,
        );
    }

    if shown < failures.len() {
        let _ = writeln!(
            writer,
            "  ... and {} more (use {} to list all)",
            failures.len() - shown,
            "-v".cyan()
        );
    }
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let stats = &summary.stats;
    let counts = format!(
        "{} translated, {} skipped, {} empty, {} failed",
        stats.translated,
        stats.skipped,
        stats.empty,
        stats.failed()
    );

    if stats.failed() == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), counts.green());
    } else {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), counts.red());
    }

    if let Some(written) = summary.bytes_written {
        let _ = writeln!(
            writer,
            "{} bytes before, {} bytes after",
            summary.original_size, written
        );
    }
}
