//! The target file: read once, rewritten atomically.

use crate::error::Result;
use crate::lines::split_lines;
use std::path::{Path, PathBuf};
use units_fs::{checksum, io};

/// What [`UnitsDocument::replace`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New content was written over the file.
    Written,
    /// Content hashed the same as what was read; the file was not touched.
    Unchanged,
}

/// A `units.js` file held fully in memory.
#[derive(Debug, Clone)]
pub struct UnitsDocument {
    path: PathBuf,
    text: String,
}

impl UnitsDocument {
    /// Read the whole file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = io::read_text(&path)?;
        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        split_lines(&self.text).len()
    }

    /// Content checksum of the text as read.
    pub fn checksum(&self) -> String {
        checksum::compute_content_checksum(&self.text)
    }

    /// Replace the file with `new_text` unless it is identical to what was read.
    pub fn replace(&self, new_text: &str) -> Result<WriteOutcome> {
        if checksum::content_unchanged(&self.text, new_text) {
            tracing::info!(path = %self.path.display(), "content unchanged, skipping write");
            return Ok(WriteOutcome::Unchanged);
        }
        io::write_text(&self.path, new_text)?;
        tracing::info!(path = %self.path.display(), bytes = new_text.len(), "file rewritten");
        Ok(WriteOutcome::Written)
    }
}
