//! Directive block scanner.
//!
//! Walks the document top to bottom and collects every directive line
//! together with the comment lines that precede it. The scan stops at the
//! first line of actual code.

use super::data::{Block, DirectiveEntry};

pub const COMMENT_MARKER: &str = "//";

const DIRECTIVE_KEYWORDS: &[&str] = &["import", "export", "part"];

const LIBRARY_KEYWORD: &str = "library";

pub const BOM: char = '\u{feff}';

/// Classification of a single source line during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Directive,
    Comment,
    Blank,
    Library,
    Code,
}

fn classify_line(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        LineKind::Blank
    } else if DIRECTIVE_KEYWORDS.iter().any(|kw| trimmed.starts_with(kw)) {
        LineKind::Directive
    } else if trimmed.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else if trimmed.starts_with(LIBRARY_KEYWORD) {
        LineKind::Library
    } else {
        LineKind::Code
    }
}

/// Drop a leading byte order mark.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix(BOM).unwrap_or(line)
}

/// Returns true if the line is an `import`, `export` or `part` directive.
pub fn is_directive_line(line: &str) -> bool {
    classify_line(strip_bom(line).trim()) == LineKind::Directive
}

/// Scan `lines` for the directive block.
///
/// Returns `None` when the document contains no directive before its first
/// line of code. Otherwise returns the entries in source order and the block
/// they span: from the first captured line of the first entry to the last
/// directive line. Comments and blank lines between the last directive and
/// the code are left outside the block.
pub fn parse(lines: &[&str]) -> Option<(Vec<DirectiveEntry>, Block)> {
    let mut entries: Vec<DirectiveEntry> = Vec::new();
    let mut pending_comments: Vec<(usize, String)> = Vec::new();
    let mut last_directive: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        let line = if idx == 0 { strip_bom(line) } else { *line };
        let trimmed = line.trim();
        match classify_line(trimmed) {
            LineKind::Directive => {
                let start_line = pending_comments.first().map_or(idx, |(first, _)| *first);
                let comments = pending_comments.drain(..).map(|(_, text)| text).collect();
                entries.push(DirectiveEntry::new(trimmed, comments, start_line));
                last_directive = Some(idx);
            }
            LineKind::Comment => pending_comments.push((idx, line.to_string())),
            LineKind::Blank => {}
            // Comments above `library` document the library itself.
            LineKind::Library if entries.is_empty() => pending_comments.clear(),
            LineKind::Library | LineKind::Code => break,
        }
    }

    let first = entries.first()?;
    let block = Block {
        start_line: first.start_line,
        end_line: last_directive?,
    };
    Some((entries, block))
}
