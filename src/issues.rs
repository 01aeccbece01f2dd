//! Issue types reported by `check` and `fix`.
//!
//! Each issue is self-contained with all information needed by the reporter
//! and by the fix action.

use enum_dispatch::enum_dispatch;

use crate::core::Replacement;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnsortedImports,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnsortedImports => write!(f, "unsorted-imports"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A file whose directive block is not in sorted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsortedImportsIssue {
    pub file_path: String,
    /// 1-based line of the first line of the block.
    pub line: usize,
    /// The block as it currently reads, lines joined with `\n`.
    pub original: String,
    /// Directive count in the block.
    pub directive_count: usize,
    /// What the block should be replaced with.
    pub replacement: Replacement,
}

impl UnsortedImportsIssue {
    /// First line of the block.
    pub fn source_line(&self) -> &str {
        self.original.lines().next().unwrap_or_default()
    }

    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnsortedImports
    }
}

/// A Dart file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnsortedImports(UnsortedImportsIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnsortedImports(_) => UnsortedImportsIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnsortedImports(_) => UnsortedImportsIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            Issue::UnsortedImports(issue) => &issue.file_path,
            Issue::ReadError(issue) => &issue.file_path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Line in a source file, with the line text for context display.
    Source {
        path: &'a str,
        line: usize,
        source_line: &'a str,
    },
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for UnsortedImportsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source {
            path: &self.file_path,
            line: self.line,
            source_line: self.source_line(),
        }
    }

    fn message(&self) -> String {
        format!(
            "{} {} not sorted",
            self.directive_count,
            if self.directive_count == 1 {
                "directive is"
            } else {
                "directives are"
            }
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `dartsort fix --apply` to sort them")
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
