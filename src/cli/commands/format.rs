//! Format command - Sort a single document from stdin.
//!
//! Intended as an editor format-on-save hook: the whole document is read
//! from stdin and written to stdout, sorted or unchanged.

use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::FormatCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    config::load_config,
    context::resolve_package_name,
    host::{Document, sort_buffer},
};

pub fn format(cmd: FormatCommand) -> Result<CommandResult> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read document from stdin")?;

    let output = format_document(input, &cmd)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write document to stdout")?;

    Ok(finish(CommandSummary::Format, Vec::new(), 1, 0, false))
}

fn format_document(input: String, cmd: &FormatCommand) -> Result<String> {
    let start_dir = search_dir(cmd.stdin_filepath.as_deref());
    let config = load_config(&start_dir)?.config;
    let explicit = cmd
        .package_name
        .as_deref()
        .or(config.package_name.as_deref());
    let package_name = resolve_package_name(&start_dir, explicit, cmd.verbose);

    let mut document = Document::new(input);
    sort_buffer(&mut document, package_name.as_str());
    Ok(document.into_text())
}

/// Directory to start the config and pubspec search from.
fn search_dir(stdin_filepath: Option<&Path>) -> PathBuf {
    stdin_filepath
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
