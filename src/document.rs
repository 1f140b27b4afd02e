use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{AuditError, Result};

/// The audited pipeline file: full text plus a 1-based line view.
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// line and the line count is always `newlines + 1`. A trailing `\r` is
/// stripped from each line view but kept in the full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    /// Read the whole file into memory.
    ///
    /// # Errors
    /// Returns `FileNotFound` when the path does not exist and `FileRead` when
    /// it exists but cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AuditError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| AuditError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "loaded {} ({} bytes)",
            path.display(),
            content.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Build a document from in-memory text.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Iterate `(line_number, line)` pairs, numbering from 1.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .map(|(i, line)| (i + 1, line))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }

    /// Hex SHA-256 of the full text, used to tie a report to its input.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
