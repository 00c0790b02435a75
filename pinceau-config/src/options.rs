use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, PinceauToml, Result};

/// Conventional cache location for generated outputs, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "node_modules/.vite/pinceau";

/// Name of the configuration file looked up at the project root.
pub const CONFIG_FILE: &str = "pinceau.toml";

/// User options relevant to staging outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinceauOptions {
    /// Output directory. Relative paths are resolved against the project
    /// root; defaults to [`DEFAULT_OUTPUT_DIR`].
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl PinceauOptions {
    /// Override the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Resolve the output directory against an explicit project root.
    pub fn resolve_output_dir(&self, base: &Path) -> PathBuf {
        match &self.output_dir {
            // `join` keeps absolute paths as they are
            Some(dir) => base.join(dir),
            None => base.join(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Parse options with a filename used in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Load options from `<base>/pinceau.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load(base: &Path) -> Result<Self> {
        let path = base.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Ok(PinceauToml::open(path)?.into_options())
    }
}

impl FromStr for PinceauOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_output_dir() {
        let base = Path::new("/project");
        let dir = PinceauOptions::default().resolve_output_dir(base);
        assert_eq!(dir, Path::new("/project/node_modules/.vite/pinceau"));
    }

    #[test]
    fn test_relative_output_dir_joins_base() {
        let options = PinceauOptions::default().with_output_dir("src/.pinceau");
        let dir = options.resolve_output_dir(Path::new("/project"));
        assert_eq!(dir, Path::new("/project/src/.pinceau"));
    }

    #[test]
    fn test_absolute_output_dir_is_kept() {
        let temp = TempDir::new().unwrap();
        let absolute = temp.path().join("out");
        let options = PinceauOptions::default().with_output_dir(&absolute);
        assert_eq!(options.resolve_output_dir(Path::new("/project")), absolute);
    }

    #[test]
    fn test_parse_output_dir() {
        let options = PinceauOptions::from_str(r#"output_dir = "theme/generated""#).unwrap();
        assert_eq!(options.output_dir, Some(PathBuf::from("theme/generated")));
    }

    #[test]
    fn test_parse_empty_file() {
        let options = PinceauOptions::from_str("").unwrap();
        assert_eq!(options, PinceauOptions::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = PinceauOptions::from_str(r#"outputDir = "x""#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = PinceauOptions::from_str("output_dir = ").unwrap_err();
        match *err {
            Error::Parse { span, filename, .. } => {
                assert!(span.is_some());
                assert_eq!(filename, CONFIG_FILE);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let options = PinceauOptions::load(temp.path()).unwrap();
        assert_eq!(options, PinceauOptions::default());
    }

    #[test]
    fn test_load_reads_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "output_dir = \".cache/theme\"\n").unwrap();

        let options = PinceauOptions::load(temp.path()).unwrap();
        assert_eq!(
            options.resolve_output_dir(temp.path()),
            temp.path().join(".cache/theme")
        );
    }
}
