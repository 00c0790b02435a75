//! Output directory staging.
//!
//! Bundlers resolve imports of the generated theme as soon as they start,
//! which can be before the token pipeline has produced anything. Staging
//! creates the output directory and fills every missing output with a
//! placeholder rendered from an empty [`TokenContext`].
//!
//! Files are processed one at a time in [`OUTPUT_FILES`] order. A single
//! process is expected to own the output directory while staging.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use pinceau_config::PinceauOptions;
use pinceau_core::{FileRules, GeneratedFile, TokenContext, WriteResult};

use crate::files::OUTPUT_FILES;

/// Outcome for a single output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedFile {
    pub name: &'static str,
    pub result: WriteResult,
}

/// Outcome of preparing the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedOutput {
    /// Resolved output directory.
    pub dir: PathBuf,
    /// Whether the directory had to be created.
    pub created: bool,
    /// Per-file outcome of stubbing.
    pub files: Vec<StagedFile>,
}

impl StagedOutput {
    /// Number of files written or replaced.
    pub fn changed(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_change()).count()
    }
}

/// Make sure the output directory exists and holds every output file.
///
/// The directory is resolved from `options` against `base`, created with
/// any missing parents, then stubbed without force. Existing files are never
/// touched, so this is safe to call at the start of every build.
pub fn prepare_output_dir(options: &PinceauOptions, base: &Path) -> Result<StagedOutput> {
    let dir = options.resolve_output_dir(base);

    let created = !dir.exists();
    if created {
        std::fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("failed to create output directory '{}'", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "created output directory");
    }

    let files = stub_outputs(&dir, false)?;
    let staged = StagedOutput {
        dir,
        created,
        files,
    };

    tracing::info!(
        dir = %staged.dir.display(),
        changed = staged.changed(),
        "output directory ready"
    );

    Ok(staged)
}

/// Write placeholder outputs into `dir`.
///
/// Without `force`, only missing files are written. With `force`, every
/// existing output is removed first so all of them are regenerated as
/// placeholders. `dir` must exist.
pub fn stub_outputs(dir: &Path, force: bool) -> Result<Vec<StagedFile>> {
    let ctx = TokenContext::empty();
    let rules = FileRules::stub(force);

    OUTPUT_FILES
        .iter()
        .map(|file| -> Result<StagedFile> {
            let result = file.bind(&ctx, rules).write(dir)?;
            Ok(StagedFile {
                name: file.name(),
                result,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::files::CSS_STUB;

    #[test]
    fn test_stub_empty_dir_writes_every_file() {
        let temp = TempDir::new().unwrap();

        let files = stub_outputs(temp.path(), false).unwrap();

        assert!(files.iter().all(|f| f.result == WriteResult::Written));
        assert_eq!(
            fs::read_to_string(temp.path().join("index.css")).unwrap(),
            CSS_STUB
        );
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_stub_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent");

        assert!(stub_outputs(&missing, false).is_err());
        assert!(!missing.exists());
    }

    #[test]
    fn test_force_reports_replaced() {
        let temp = TempDir::new().unwrap();
        stub_outputs(temp.path(), false).unwrap();

        let files = stub_outputs(temp.path(), true).unwrap();
        assert!(files.iter().all(|f| f.result == WriteResult::Replaced));
    }

    #[test]
    fn test_prepare_reports_creation() {
        let temp = TempDir::new().unwrap();

        let staged = prepare_output_dir(&PinceauOptions::default(), temp.path()).unwrap();
        assert!(staged.created);
        assert_eq!(staged.changed(), 3);

        let again = prepare_output_dir(&PinceauOptions::default(), temp.path()).unwrap();
        assert!(!again.created);
        assert_eq!(again.changed(), 0);
    }
}
