//! Fix command - Sort the directive block of every unsorted file.
//!
//! Runs in dry-run mode by default: the rewritten blocks are previewed and
//! the command exits with 1 if any file would change. Use `--apply` to
//! write the files.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::super::args::FixCommand;
use super::{CommandResult, CommandSummary, FixSummary, helper::finish};
use crate::{
    context::SortContext,
    host::{Document, sort_buffer},
    issues::{Issue, UnsortedImportsIssue},
};

pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let ctx = SortContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let issues = ctx.collect_issues();
    let unsorted_issues: Vec<UnsortedImportsIssue> = issues
        .iter()
        .filter_map(|issue| match issue {
            Issue::UnsortedImports(issue) => Some(issue.clone()),
            Issue::ReadError(_) => None,
        })
        .collect();

    let mut written_count = 0;
    if apply {
        for issue in &unsorted_issues {
            if write_sorted(Path::new(&issue.file_path), &ctx.package_name)? {
                written_count += 1;
            } else if ctx.verbose {
                eprintln!(
                    "{} {} changed while sorting, skipped",
                    "warning:".bold().yellow(),
                    issue.file_path
                );
            }
        }
    }

    Ok(finish(
        CommandSummary::Fix(FixSummary {
            is_apply: apply,
            written_count,
            unsorted_issues,
        }),
        issues,
        ctx.files.len(),
        ctx.skipped_count,
        !apply,
    ))
}

/// Re-read `path`, sort it and write it back. Returns `true` if written.
fn write_sorted(path: &Path, package_name: &str) -> Result<bool> {
    let mut document = Document::load(path)?;
    if !sort_buffer(&mut document, package_name) {
        return Ok(false);
    }
    document.save()
}
