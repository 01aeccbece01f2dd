use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::TextBuffer;
use crate::core::{Replacement, ReplacementRange};

/// In-memory document, optionally backed by a file.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    text: String,
    modified: bool,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
            modified: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
            modified: false,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Write the document back to its file if it was modified.
    ///
    /// Returns `true` if the file was written.
    pub fn save(&mut self) -> Result<bool> {
        if !self.modified {
            return Ok(false);
        }
        let Some(path) = &self.path else {
            anyhow::bail!("Document has no backing file");
        };
        fs::write(path, &self.text)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.modified = false;
        Ok(true)
    }
}

impl TextBuffer for Document {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace(&mut self, range: &ReplacementRange, text: &str) {
        let replacement = Replacement {
            range: *range,
            text: text.to_string(),
        };
        let updated = replacement.apply(&self.text);
        if updated != self.text {
            self.text = updated;
            self.modified = true;
        }
    }
}
