use std::collections::BTreeMap;

use super::category::{Category, categorize};
use super::data::DirectiveEntry;

/// Entries of one non-empty category, sorted by content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub category: Category,
    pub entries: Vec<DirectiveEntry>,
}

/// Bucket entries by category and sort each bucket.
///
/// Sorting compares `content` by Unicode codepoint (`str::cmp`) and is
/// stable, so identical lines keep their source order. This does not try to
/// give path separators any special rank: `'a/b.dart'` sorts after
/// `'a.dart'` because `/` follows `.` in ASCII.
pub fn group(entries: Vec<DirectiveEntry>, package_name: &str) -> Vec<Group> {
    let mut buckets: BTreeMap<Category, Vec<DirectiveEntry>> = BTreeMap::new();
    for entry in entries {
        buckets
            .entry(categorize(&entry, package_name))
            .or_default()
            .push(entry);
    }

    buckets
        .into_iter()
        .map(|(category, mut entries)| {
            entries.sort_by(|a, b| a.content.cmp(&b.content));
            Group { category, entries }
        })
        .collect()
}
