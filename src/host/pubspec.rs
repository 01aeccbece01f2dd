//! Package name lookup from `pubspec.yaml`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use super::PackageNameSource;

pub const PUBSPEC_FILE_NAME: &str = "pubspec.yaml";

static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^name:(.*)$").unwrap());

/// Find the nearest `pubspec.yaml`, walking up from `start_dir`.
///
/// Stops at the repository root (a directory containing `.git`).
pub fn find_pubspec(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let pubspec_path = current.join(PUBSPEC_FILE_NAME);
        if pubspec_path.is_file() {
            return Some(pubspec_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Extract the value of the first top-level `name:` key.
///
/// # Examples
///
/// ```
/// use dartsort::host::pubspec::parse_package_name;
///
/// assert_eq!(parse_package_name("name: my_app\nversion: 1.0.0\n"), Some("my_app".into()));
/// assert_eq!(parse_package_name("name: \"quoted\"\n"), Some("quoted".into()));
/// assert_eq!(parse_package_name("version: 1.0.0\n"), None);
/// ```
pub fn parse_package_name(content: &str) -> Option<String> {
    let caps = NAME_LINE.captures(content)?;
    let value = caps.get(1)?.as_str().trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
        .trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Package name resolved from the `pubspec.yaml` above a directory.
#[derive(Debug, Clone)]
pub struct Pubspec {
    pub path: Option<PathBuf>,
}

impl Pubspec {
    pub fn discover(start_dir: &Path) -> Self {
        Self {
            path: find_pubspec(start_dir),
        }
    }
}

impl PackageNameSource for Pubspec {
    /// Missing, unreadable or nameless manifests all resolve to `None`.
    fn package_name(&self) -> Option<String> {
        let content = fs::read_to_string(self.path.as_ref()?).ok()?;
        parse_package_name(&content)
    }
}
