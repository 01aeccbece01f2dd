use super::group::Group;

/// Serialize grouped entries back to source text.
///
/// Each entry is written as its comments followed by its directive line.
/// Groups are separated by exactly one blank line; there is no leading or
/// trailing blank line and no final newline.
pub fn render(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|group| {
            group
                .entries
                .iter()
                .flat_map(|entry| {
                    entry
                        .comments
                        .iter()
                        .map(String::as_str)
                        .chain(std::iter::once(entry.content.as_str()))
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
