use std::path::Path;

use crate::{Error, PinceauOptions, Result};

/// A parsed pinceau.toml file.
pub struct PinceauToml {
    options: PinceauOptions,
}

impl PinceauToml {
    /// Open and parse a pinceau.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let options = PinceauOptions::from_str_with_filename(&content, &filename)?;

        Ok(Self { options })
    }

    /// Get the parsed options.
    pub fn options(&self) -> &PinceauOptions {
        &self.options
    }

    pub fn into_options(self) -> PinceauOptions {
        self.options
    }
}
