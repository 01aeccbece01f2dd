//! Data types shared by the directive pipeline.
//!
//! All of these are built fresh from the document text on every call to
//! [`sort`](super::sort) and dropped once the replacement text is produced.

use super::parser::BOM;

/// A single `import`, `export` or `part` line together with the comment
/// lines captured directly above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveEntry {
    /// Trimmed directive text, e.g. `import 'dart:async';`.
    pub content: String,
    /// Comment lines attached to this directive, verbatim and in source order.
    pub comments: Vec<String>,
    /// 0-based index of the first captured line (first comment, or the
    /// directive itself when it has no comments).
    pub start_line: usize,
}

impl DirectiveEntry {
    pub fn new(content: impl Into<String>, comments: Vec<String>, start_line: usize) -> Self {
        Self {
            content: content.into(),
            comments,
            start_line,
        }
    }
}

/// Line span of the directive block, both ends inclusive and 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start_line: usize,
    pub end_line: usize,
}

/// Position in a document. Columns count Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// Range of document text to be replaced by the rendered block.
///
/// Starts at column 0 of the block's first line (after a byte order mark) and ends just past the
/// content of its last line. Line terminators are never part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRange {
    pub start: Position,
    pub end: Position,
}

impl ReplacementRange {
    pub fn from_block(block: Block, lines: &[&str]) -> Self {
        let end_col = lines
            .get(block.end_line)
            .map_or(0, |line| line.chars().count());
        // A byte order mark stays in front of the block.
        let start_col = match lines.get(block.start_line) {
            Some(line) if block.start_line == 0 && line.starts_with(BOM) => 1,
            _ => 0,
        };
        Self {
            start: Position {
                line: block.start_line,
                col: start_col,
            },
            end: Position {
                line: block.end_line,
                col: end_col,
            },
        }
    }

    /// Resolve the range to a byte span of `text`.
    ///
    /// Returns `None` when the range does not fit the document.
    pub fn byte_span(&self, text: &str) -> Option<(usize, usize)> {
        let start = byte_offset(text, self.start)?;
        let end = byte_offset(text, self.end)?;
        (start <= end).then_some((start, end))
    }
}

/// Byte offset of `pos` in `text`, clamping the column to the line's content.
fn byte_offset(text: &str, pos: Position) -> Option<usize> {
    let mut line_start = 0;
    for (idx, raw) in text.split_inclusive('\n').enumerate() {
        if idx == pos.line {
            let content = raw.trim_end_matches('\n').trim_end_matches('\r');
            let col_bytes = content
                .char_indices()
                .nth(pos.col)
                .map_or(content.len(), |(offset, _)| offset);
            return Some(line_start + col_bytes);
        }
        line_start += raw.len();
    }
    // Position on the empty line after a trailing newline (or in an empty text).
    let line_count = text.split_inclusive('\n').count();
    (pos.line == line_count && pos.col == 0).then_some(text.len())
}

/// Result of sorting a document: where to splice and what to put there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: ReplacementRange,
    pub text: String,
}

impl Replacement {
    /// Current text of the range in `document`, with `\r\n` folded to `\n`.
    pub fn original<'a>(&self, document: &'a str) -> Option<std::borrow::Cow<'a, str>> {
        let (start, end) = self.range.byte_span(document)?;
        let slice = &document[start..end];
        Some(if slice.contains('\r') {
            std::borrow::Cow::Owned(slice.replace("\r\n", "\n"))
        } else {
            std::borrow::Cow::Borrowed(slice)
        })
    }

    /// True when the block is already in sorted form.
    pub fn is_noop(&self, document: &str) -> bool {
        self.original(document)
            .is_some_and(|original| original == self.text)
    }

    /// Splice the replacement into `document`.
    ///
    /// Uses `\r\n` for the inserted lines when the document does.
    pub fn apply(&self, document: &str) -> String {
        let Some((start, end)) = self.range.byte_span(document) else {
            return document.to_string();
        };
        let text = if document.contains("\r\n") {
            self.text.replace('\n', "\r\n")
        } else {
            self.text.clone()
        };

        let mut out = String::with_capacity(document.len() + text.len());
        out.push_str(&document[..start]);
        out.push_str(&text);
        out.push_str(&document[end..]);
        out
    }
}
