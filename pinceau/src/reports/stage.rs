//! Staging report data structures.

use std::{fmt, path::PathBuf};

use pinceau_codegen_typescript::{StagedFile, StagedOutput};
use pinceau_core::WriteResult;

/// Report data from preparing or stubbing an output directory.
#[derive(Debug)]
pub struct StageReport {
    /// Output directory.
    pub dir: PathBuf,
    /// Whether the directory was created by this run.
    pub created: bool,
    /// Per-file outcome.
    pub files: Vec<StagedFile>,
}

impl StageReport {
    pub fn prepared(staged: StagedOutput) -> Self {
        Self {
            dir: staged.dir,
            created: staged.created,
            files: staged.files,
        }
    }

    pub fn stubbed(dir: PathBuf, files: Vec<StagedFile>) -> Self {
        Self {
            dir,
            created: false,
            files,
        }
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output: {}", self.dir.display())?;
        if self.created {
            write!(f, " (created)")?;
        }
        writeln!(f)?;

        writeln!(f, "Files:")?;
        for file in &self.files {
            let marker = match file.result {
                WriteResult::Written => '+',
                WriteResult::Replaced => '~',
                WriteResult::Skipped => '=',
            };
            writeln!(f, "  {} {}", marker, file.name)?;
        }
        Ok(())
    }
}
