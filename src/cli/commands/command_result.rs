use crate::issues::{Issue, UnsortedImportsIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Fix(FixSummary),
    Format,
    Init,
}

#[derive(Debug)]
pub struct FixSummary {
    pub is_apply: bool,
    /// Files rewritten on disk. Always 0 in dry-run mode.
    pub written_count: usize,
    pub unsorted_issues: Vec<UnsortedImportsIssue>,
}

/// Result of running dartsort commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, warnings (unsorted files) map to exit code 1.
    /// If false, only errors affect the exit code.
    pub fail_on_issues: bool,
    /// All issues found during the run.
    pub issues: Vec<Issue>,
    /// Number of Dart files that were looked at.
    pub files_checked: usize,
    /// Paths the scanner could not access.
    pub paths_skipped: usize,
}
