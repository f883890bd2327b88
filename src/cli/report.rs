//! Report formatting and printing utilities.
//!
//! Per-file results and residual calls go to stdout in cargo-style format;
//! missing and failed files go to stderr. Every printer has a `*_to`
//! variant taking explicit writers so output can be tested.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::migration::{FileOutcome, FileStatus, MigrationReport, RunSummary, ShellOutcome};
use crate::rewrite::MigrationWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Residual calls listed per file when not verbose.
const MAX_WARNINGS_DISPLAY: usize = 3;

/// Print a whole migration report to stdout/stderr.
pub fn print_report(report: &MigrationReport, apply: bool, verbose: bool) {
    print_report_to(
        report,
        apply,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a migration report to custom writers.
pub fn print_report_to<W: Write, E: Write>(
    report: &MigrationReport,
    apply: bool,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    for outcome in &report.files {
        print_file_outcome(outcome, apply, verbose, out, err);
    }

    if let Some(shell) = &report.shell {
        print_shell_outcome(shell, apply, verbose, out, err);
    }

    print_summary(&report.summary, out);

    let shell_changed = report
        .shell
        .as_ref()
        .is_some_and(|shell| shell.status == FileStatus::Changed);
    if !apply && (report.summary.files_changed > 0 || shell_changed) {
        let _ = writeln!(out, "Run with {} to write these changes.", "--apply".cyan());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_file_outcome<W: Write, E: Write>(
    outcome: &FileOutcome,
    apply: bool,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &outcome.status {
        FileStatus::Changed => {
            let label = if apply {
                "Migrated".green().bold()
            } else {
                "Would migrate".yellow().bold()
            };
            let _ = writeln!(
                out,
                "{} {} ({} call(s))",
                label, outcome.path, outcome.result.replaced_count
            );
        }
        FileStatus::Unchanged => {
            if verbose {
                let _ = writeln!(out, "{} {}", "Unchanged".dimmed(), outcome.path);
            }
        }
        FileStatus::NotFound => {
            let _ = writeln!(
                err,
                "{} file not found: {}",
                "warning:".bold().yellow(),
                outcome.path
            );
        }
        FileStatus::Failed(reason) => {
            let _ = writeln!(
                err,
                "{} failed to migrate {}: {}",
                "error:".bold().red(),
                outcome.path,
                reason
            );
        }
    }

    if outcome.has_residual() {
        print_residual(outcome, verbose, out);
    }
}

fn print_residual<W: Write>(outcome: &FileOutcome, verbose: bool, out: &mut W) {
    let warnings = &outcome.result.warnings;
    let _ = writeln!(
        out,
        "  {} {} call(s) left unchanged",
        "-".yellow(),
        outcome.result.unmatched_count
    );

    if verbose {
        let max_line_width = warnings
            .iter()
            .map(|w| w.line)
            .max()
            .map(|n| n.to_string().len())
            .unwrap_or(1);
        for warning in warnings {
            print_warning(&outcome.path, warning, out, max_line_width);
        }
        return;
    }

    for warning in warnings.iter().take(MAX_WARNINGS_DISPLAY) {
        let _ = writeln!(out, "    {}", warning);
    }
    let remaining = warnings.len().saturating_sub(MAX_WARNINGS_DISPLAY);
    if remaining > 0 {
        let _ = writeln!(
            out,
            "    (and {} more, use {} for details)",
            remaining,
            "-v".cyan()
        );
    }
}

fn print_warning<W: Write>(
    path: &str,
    warning: &MigrationWarning,
    out: &mut W,
    max_line_width: usize,
) {
    let _ = writeln!(out, "{}: {}", "warning".bold().yellow(), warning.kind);
    let _ = writeln!(
        out,
        "  {} {}:{}:{}",
        "-->".blue(),
        path,
        warning.line,
        warning.col
    );
    let _ = writeln!(
        out,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        out,
        "{:>width$} {} {}",
        warning.line.to_string().blue(),
        "|".blue(),
        warning.source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = warning
        .source_line
        .chars()
        .take(warning.col.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        out,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );
    let _ = writeln!(out);
}

fn print_shell_outcome<W: Write, E: Write>(
    shell: &ShellOutcome,
    apply: bool,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &shell.status {
        FileStatus::Changed => {
            let label = if apply {
                "Cleaned".green().bold()
            } else {
                "Would clean".yellow().bold()
            };
            let _ = writeln!(out, "{} {} (toaster mounts)", label, shell.path);
        }
        FileStatus::Unchanged => {
            if verbose {
                let _ = writeln!(out, "{} {}", "Unchanged".dimmed(), shell.path);
            }
        }
        FileStatus::NotFound => {
            if verbose {
                let _ = writeln!(
                    err,
                    "{} shell file not found: {}",
                    "warning:".bold().yellow(),
                    shell.path
                );
            }
        }
        FileStatus::Failed(reason) => {
            let _ = writeln!(
                err,
                "{} failed to clean {}: {}",
                "error:".bold().red(),
                shell.path,
                reason
            );
        }
    }
}

fn print_summary<W: Write>(summary: &RunSummary, out: &mut W) {
    if summary.files_total == 0 {
        let _ = writeln!(out, "No source files to migrate.");
        return;
    }

    let mark = if summary.files_with_residual == 0 && summary.files_failed == 0 {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    };
    let _ = writeln!(
        out,
        "\n{} {}/{} file(s) fully migrated ({:.1}%)",
        mark,
        summary.files_fully_migrated,
        summary.files_total,
        summary.progress()
    );
    let _ = writeln!(out, "  - files changed: {}", summary.files_changed);
    let _ = writeln!(out, "  - calls replaced: {}", summary.calls_replaced);

    if summary.files_with_residual > 0 {
        let _ = writeln!(
            out,
            "  - files with residual calls: {}",
            summary.files_with_residual
        );
    }
    if summary.files_not_found > 0 {
        let _ = writeln!(out, "  - files not found: {}", summary.files_not_found);
    }
    if summary.files_failed > 0 {
        let _ = writeln!(out, "  - files failed: {}", summary.files_failed);
    }
}
