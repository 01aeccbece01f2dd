use super::data::DirectiveEntry;

/// Group a directive is placed into. Variant order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// `import 'dart:...'`
    Dart,
    /// `import 'package:...'` from a dependency.
    Package,
    /// `import 'package:<own package>/...'`
    PackageLocal,
    /// Relative path import.
    Relative,
    Part,
    Export,
}

/// Assign `entry` to its category. First matching rule wins; `export` and
/// `part` must be checked before the `dart:`/`package:` substrings.
///
/// An empty `package_name` disables the [`Category::PackageLocal`] rule.
pub fn categorize(entry: &DirectiveEntry, package_name: &str) -> Category {
    let content = entry.content.as_str();

    if content.starts_with("export") {
        Category::Export
    } else if content.starts_with("part") {
        Category::Part
    } else if content.contains("dart:") {
        Category::Dart
    } else if !package_name.is_empty() && content.contains(&format!("package:{package_name}")) {
        Category::PackageLocal
    } else if content.contains("package:") {
        Category::Package
    } else {
        Category::Relative
    }
}
