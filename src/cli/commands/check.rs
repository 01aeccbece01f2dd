use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::context::SortContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = SortContext::new(&cmd.common)?;
    let issues = ctx.collect_issues();

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files.len(),
        ctx.skipped_count,
        true,
    ))
}
