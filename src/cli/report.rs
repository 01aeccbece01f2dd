//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the sorting
//! logic so dartsort can be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, FixSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity, UnsortedImportsIssue};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_command_output(result, &mut stdout);
    print_skipped_warning_to(result.paths_skipped, verbose, &mut io::stderr().lock());
}

fn print_command_output<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, writer);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, writer);
            }
        }
        CommandSummary::Fix(summary) => {
            let read_errors: Vec<Issue> = result
                .issues
                .iter()
                .filter(|i| matches!(i, Issue::ReadError(_)))
                .cloned()
                .collect();
            report_to(&read_errors, writer);
            print_fix_to(summary, result.files_checked, writer);
        }
        // The document itself is the output.
        CommandSummary::Format => {}
        CommandSummary::Init => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}

/// Print issues in cargo-style format followed by a summary line.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = issues
        .iter()
        .filter_map(|issue| match issue.location() {
            ReportLocation::Source { line, .. } => Some(line.to_string().len()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .unwrap_or(1);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when every file is sorted.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} Dart {} - all directives sorted",
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_fix_to<W: Write>(summary: &FixSummary, files_checked: usize, writer: &mut W) {
    let count = summary.unsorted_issues.len();
    if count == 0 {
        print_success_to(files_checked, writer);
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} directives in {} file(s).",
            "Sorted".green().bold(),
            summary.written_count
        );
        return;
    }

    for issue in &summary.unsorted_issues {
        print_preview(issue, writer);
    }
    let _ = writeln!(
        writer,
        "{} directives in {} file(s).",
        "Would sort".yellow().bold(),
        count
    );
    let _ = writeln!(writer, "Run with {} to write these changes.", "--apply".cyan());
}

/// Show the block as it is and as it would be written.
fn print_preview<W: Write>(issue: &UnsortedImportsIssue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        issue.file_path,
        issue.line
    );
    for line in issue.original.lines() {
        print_preview_line(writer, "-".red(), line.red());
    }
    for line in issue.replacement.text.lines() {
        print_preview_line(writer, "+".green(), line.green());
    }
    let _ = writeln!(writer);
}

fn print_preview_line<W: Write>(writer: &mut W, marker: ColoredString, line: ColoredString) {
    if line.is_empty() {
        let _ = writeln!(writer, "  {}", marker);
    } else {
        let _ = writeln!(writer, "  {} {}", marker, line);
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source {
            path,
            line,
            source_line,
        } => {
            let _ = writeln!(writer, "  {} {}:{}:1", "-->".blue(), path, line);

            let underline = match severity {
                Severity::Error => "^".repeat(source_line.width().max(1)).red(),
                Severity::Warning => "^".repeat(source_line.width().max(1)).yellow(),
            };
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                "",
                "|".blue(),
                underline,
                width = max_line_width
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}
