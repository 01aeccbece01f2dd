use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{
        parser::{is_directive_line, strip_bom},
        sort,
    },
    host::{Document, PackageNameSource, Pubspec, TextBuffer, file_scanner::scan_files},
    issues::{Issue, ReadErrorIssue, UnsortedImportsIssue},
};

/// Resolve the package name for a workspace.
///
/// An explicit name (CLI flag or config) wins over the pubspec found above
/// `root`. Returns an empty string when nothing is known.
pub fn resolve_package_name(root: &Path, explicit: Option<&str>, verbose: bool) -> String {
    if let Some(name) = explicit.package_name() {
        return name;
    }

    let pubspec = Pubspec::discover(root);
    let name = pubspec.package_name();
    if verbose {
        match (&pubspec.path, &name) {
            (Some(path), Some(name)) => {
                eprintln!(
                    "{} package '{}' from {}",
                    "info:".bold().cyan(),
                    name,
                    path.display()
                );
            }
            (Some(path), None) => {
                eprintln!(
                    "{} No 'name:' field in {}; package-local imports will not be grouped",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            (None, _) => {
                eprintln!(
                    "{} No pubspec.yaml found; package-local imports will not be grouped",
                    "warning:".bold().yellow()
                );
            }
        }
    }
    name.unwrap_or_default()
}

/// Everything a `check` or `fix` run needs: the package name and the Dart
/// files to look at.
pub struct SortContext {
    /// Empty when the local package is unknown.
    pub package_name: String,
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
    pub verbose: bool,
}

impl SortContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root = args.path.clone();
        if !root.is_dir() {
            anyhow::bail!("Path is not a directory: {}", root.display());
        }

        let config = load_config(&root)?.config;
        let explicit = args
            .package_name
            .as_deref()
            .or(config.package_name.as_deref());
        let package_name = resolve_package_name(&root, explicit, args.verbose);

        let scan = scan_files(
            &root,
            &config.includes,
            &config.ignores,
            config.ignore_generated,
            args.verbose,
        );

        Ok(Self {
            package_name,
            files: scan.files.into_iter().collect(),
            skipped_count: scan.skipped_count,
            verbose: args.verbose,
        })
    }

    /// Sort every file in memory and report the ones that would change.
    pub fn collect_issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .files
            .par_iter()
            .filter_map(|path| self.check_file(path))
            .collect();
        issues.sort_by(|a, b| a.file_path().cmp(b.file_path()));
        issues
    }

    fn check_file(&self, path: &Path) -> Option<Issue> {
        let file_path = path.display().to_string();
        let document = match Document::load(path) {
            Ok(document) => document,
            Err(err) => {
                if self.verbose {
                    eprintln!("{} {:#}", "warning:".bold().yellow(), err);
                }
                return Some(Issue::ReadError(ReadErrorIssue {
                    file_path,
                    error: format!("{:#}", err),
                }));
            }
        };

        let text = document.text();
        let replacement = sort(text, &self.package_name)?;
        if replacement.is_noop(text) {
            return None;
        }

        let mut lines: Vec<&str> = text.lines().collect();
        if let Some(first) = lines.first_mut() {
            *first = strip_bom(*first);
        }
        let block = &lines[replacement.range.start.line..=replacement.range.end.line];
        Some(Issue::UnsortedImports(UnsortedImportsIssue {
            file_path,
            line: replacement.range.start.line + 1,
            original: block.join("\n"),
            directive_count: block.iter().filter(|l| is_directive_line(l)).count(),
            replacement,
        }))
    }
}
