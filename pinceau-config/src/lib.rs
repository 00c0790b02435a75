//! Configuration for the Pinceau theme output stager.
//!
//! Options come from an optional `pinceau.toml` at the project root.
//! Every field has a documented default, so a missing file is valid.

mod error;
mod file;
mod options;

pub use error::{Error, Result};
pub use file::PinceauToml;
pub use options::{CONFIG_FILE, DEFAULT_OUTPUT_DIR, PinceauOptions};
