use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated output file
pub trait GeneratedFile {
    /// Get the file path inside the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk according to its rules.
    ///
    /// The output directory must already exist.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        let removed = match self.rules().overwrite {
            Overwrite::Replace if path.exists() => {
                std::fs::remove_file(&path)
                    .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
                tracing::debug!(path = %path.display(), "removed existing output");
                true
            }
            _ => false,
        };

        if path.exists() {
            tracing::debug!(path = %path.display(), "output exists, skipping");
            return Ok(WriteResult::Skipped);
        }

        write_file(&path, &self.render())?;
        tracing::debug!(path = %path.display(), "wrote output");

        if removed {
            Ok(WriteResult::Replaced)
        } else {
            Ok(WriteResult::Written)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was absent and has been written
    Written,
    /// File existed, was removed and written again
    Replaced,
    /// File was left untouched (already exists)
    Skipped,
}

impl WriteResult {
    /// Whether the file on disk changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Only create the file when it is missing.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }

    /// Remove any existing file and write a fresh one.
    pub fn replace() -> Self {
        Self {
            overwrite: Overwrite::Replace,
        }
    }

    /// Rules for a placeholder file, replaced only in force mode.
    pub fn stub(force: bool) -> Self {
        if force {
            Self::replace()
        } else {
            Self::if_missing()
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::if_missing()
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Only create if file doesn't exist (stubs)
    IfMissing,
    /// Delete the existing file, then create it again
    Replace,
}
