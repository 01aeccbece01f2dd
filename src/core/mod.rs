//! Directive sorting engine.
//!
//! A pure pipeline over the document text:
//!
//! ```text
//! parse (find block, attach comments)
//!     ↓
//! categorize (dart / package / package-local / relative / part / export)
//!     ↓
//! group (bucket + sort within bucket)
//!     ↓
//! render (one blank line between groups)
//! ```
//!
//! Nothing here performs I/O. Hosts resolve the package name and apply the
//! returned [`Replacement`] themselves (see [`crate::host`]).

pub mod category;
pub mod data;
pub mod group;
pub mod parser;
pub mod render;


pub use category::{Category, categorize};
pub use data::{Block, DirectiveEntry, Position, Replacement, ReplacementRange};
pub use group::{Group, group};
pub use parser::parse;
pub use render::render;

/// Compute the sorted directive block for `document`.
///
/// Returns `None` when the document has no directive block. An empty
/// `package_name` means the local package is unknown, so every `package:`
/// import is grouped together.
///
/// # Example
///
/// ```
/// use dartsort::core::sort;
///
/// let doc = "import 'package:b/b.dart';\nimport 'dart:io';\n\nvoid main() {}\n";
/// let replacement = sort(doc, "").unwrap();
/// assert_eq!(replacement.text, "import 'dart:io';\n\nimport 'package:b/b.dart';");
/// assert_eq!(replacement.range.end.line, 1);
/// ```
pub fn sort(document: &str, package_name: &str) -> Option<Replacement> {
    let lines: Vec<&str> = document.lines().collect();
    let (entries, block) = parse(&lines)?;
    let groups = group(entries, package_name);

    Some(Replacement {
        range: ReplacementRange::from_block(block, &lines),
        text: render(&groups),
    })
}
