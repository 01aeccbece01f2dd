//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report files whose import/export/part block is not sorted
//! - `fix`: Sort directive blocks (dry-run unless `--apply`)
//! - `format`: Sort a single document read from stdin (editor integration)
//! - `init`: Initialize dartsort configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Fix(cmd)) => cmd.common.verbose,
            Some(Command::Format(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `check` and `fix`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root to scan for Dart files
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Name of the local package (overrides config file and pubspec.yaml)
    #[arg(long, env = "DARTSORT_PACKAGE_NAME")]
    pub package_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Name of the local package (overrides config file and pubspec.yaml)
    #[arg(long, env = "DARTSORT_PACKAGE_NAME")]
    pub package_name: Option<String>,

    /// Path of the document being formatted, used to locate pubspec.yaml
    #[arg(long)]
    pub stdin_filepath: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report files whose import/export/part directives are not sorted
    Check(CheckCommand),
    /// Sort import/export/part directives in place
    Fix(FixCommand),
    /// Read a Dart document from stdin and write it sorted to stdout
    Format(FormatCommand),
    /// Initialize a new .dartsortrc.json configuration file
    Init,
}
