//! Report formatting and printing utilities.
//!
//! Kept out of the core so tailcomp can be used as a library: extraction
//! returns warnings as data and only this module decides how they look.

use std::io::{self, Write};

use colored::Colorize;

use crate::issues::{ExtractionWarning, WarningKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Counts shown in the `generate` summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub class_count: usize,
    pub call_count: usize,
    pub file_count: usize,
}

/// Print the `generate` summary line to stdout.
pub fn print_generated(summary: &GenerateSummary, output: &str, dry_run: bool) {
    print_generated_to(summary, output, dry_run, &mut io::stdout().lock());
}

/// Print the `generate` summary line to a custom writer.
pub fn print_generated_to<W: Write>(
    summary: &GenerateSummary,
    output: &str,
    dry_run: bool,
    writer: &mut W,
) {
    let message = format!(
        "Generated {} {} from {} call {} in {} {}",
        summary.class_count,
        plural(summary.class_count, "class", "classes"),
        summary.call_count,
        plural(summary.call_count, "site", "sites"),
        summary.file_count,
        plural(summary.file_count, "file", "files"),
    );
    let target = if dry_run {
        "(dry run)".dimmed().to_string()
    } else {
        format!("-> {}", output).dimmed().to_string()
    };
    let _ = writeln!(
        writer,
        "{} {} {}",
        SUCCESS_MARK.green(),
        message.green(),
        target
    );
}

/// Print extraction warnings to stderr.
pub fn print_warnings(warnings: &[ExtractionWarning], verbose: bool) {
    print_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

/// Print extraction warnings to a custom writer.
///
/// In verbose mode every warning is listed; otherwise one count line per
/// category points at `-v`.
pub fn print_warnings_to<W: Write>(warnings: &[ExtractionWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
        }
        return;
    }

    let unreadable = warnings
        .iter()
        .filter(|w| w.kind == WarningKind::UnreadableFile)
        .count();
    let calls = warnings.len() - unreadable;

    if calls > 0 {
        let _ = writeln!(
            writer,
            "{} {} call {} could not be evaluated (use {} for details)",
            "warning:".bold().yellow(),
            calls,
            plural(calls, "site", "sites"),
            "-v".cyan()
        );
    }
    if unreadable > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read (use {} for details)",
            "warning:".bold().yellow(),
            unreadable,
            plural(unreadable, "file", "files"),
            "-v".cyan()
        );
    }
}

/// Print the failure line used when `--deny-warnings` turns warnings into a failed run.
pub fn print_denied(count: usize) {
    print_denied_to(count, &mut io::stderr().lock());
}

pub fn print_denied_to<W: Write>(count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {} denied by --deny-warnings",
            count,
            plural(count, "warning", "warnings")
        )
        .red()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
