//! dartsort - import/export/part directive sorter for Dart
//!
//! dartsort is a CLI tool and library that reorganizes the directive block
//! at the top of Dart source files: directives are grouped into
//! `dart:`, package, local package, relative, `part` and `export` groups,
//! sorted within each group, and separated by a single blank line.
//! Comments directly above a directive move with it.
//!
//! ## Module Structure
//!
//! - `core`: Pure sorting pipeline (`parse` → `categorize` → `group` → `render`)
//! - `host`: Capabilities the pipeline needs from its environment
//!   (package name lookup, text buffers, file scanning)
//! - `config`: Configuration file loading and parsing
//! - `context`: Per-run state for `check` and `fix`
//! - `issues`: Issue type definitions and reporting
//! - `cli`: Command-line interface layer

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod host;
pub mod issues;
