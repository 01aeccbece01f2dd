//! Integration layer between the pure sorter and the outside world.
//!
//! The sorter itself only sees a `&str` document and a package name. The
//! two capabilities below are what a host (the CLI, an editor plugin, a
//! test) has to provide.

mod document;
pub mod file_scanner;
pub mod pubspec;

pub use document::Document;
pub use pubspec::Pubspec;

use crate::core::{ReplacementRange, sort};

/// Something that knows the name of the package being edited.
pub trait PackageNameSource {
    fn package_name(&self) -> Option<String>;
}

impl PackageNameSource for str {
    fn package_name(&self) -> Option<String> {
        let name = self.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

impl PackageNameSource for String {
    fn package_name(&self) -> Option<String> {
        self.as_str().package_name()
    }
}

impl<T: PackageNameSource + ?Sized> PackageNameSource for &T {
    fn package_name(&self) -> Option<String> {
        (**self).package_name()
    }
}

impl<T: PackageNameSource> PackageNameSource for Option<T> {
    fn package_name(&self) -> Option<String> {
        self.as_ref().and_then(PackageNameSource::package_name)
    }
}

/// A text buffer the sorted block can be written back into.
pub trait TextBuffer {
    fn text(&self) -> &str;

    fn replace(&mut self, range: &ReplacementRange, text: &str);
}

/// Sort the directive block of `buffer` in place.
///
/// Returns `true` if the buffer content changed.
pub fn sort_buffer<B, P>(buffer: &mut B, packages: &P) -> bool
where
    B: TextBuffer + ?Sized,
    P: PackageNameSource + ?Sized,
{
    let package_name = packages.package_name().unwrap_or_default();
    let Some(replacement) = sort(buffer.text(), &package_name) else {
        return false;
    };
    if replacement.is_noop(buffer.text()) {
        return false;
    }
    buffer.replace(&replacement.range, &replacement.text);
    true
}
