//! Output file generators.
//!
//! [`OUTPUT_FILES`] is the lookup table of every file the pipeline emits,
//! pairing a file name with the format that renders it.

mod index_css;
mod index_ts;
mod utils_ts;

use std::path::{Path, PathBuf};

pub use index_css::{CSS_STUB, css_stub};
pub use index_ts::ts_full;
use pinceau_core::{FileRules, GeneratedFile, TokenContext};
pub use utils_ts::utils_full;

/// A named output file and the format that renders it.
#[derive(Clone, Copy)]
pub struct OutputFile {
    name: &'static str,
    format: fn(&TokenContext) -> String,
}

impl OutputFile {
    pub const fn new(name: &'static str, format: fn(&TokenContext) -> String) -> Self {
        Self { name, format }
    }

    /// File name inside the output directory.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render the file for a token context.
    pub fn render(&self, ctx: &TokenContext) -> String {
        (self.format)(ctx)
    }

    /// Bind this file to a context and write rules.
    pub fn bind<'a>(&'a self, ctx: &'a TokenContext, rules: FileRules) -> BoundFile<'a> {
        BoundFile {
            file: self,
            ctx,
            rules,
        }
    }
}

/// Every generated output, in write order.
pub static OUTPUT_FILES: [OutputFile; 3] = [
    OutputFile::new("index.css", css_stub),
    OutputFile::new("index.ts", ts_full),
    OutputFile::new("utils.ts", utils_full),
];

/// An output file ready to be written.
pub struct BoundFile<'a> {
    file: &'a OutputFile,
    ctx: &'a TokenContext,
    rules: FileRules,
}

impl GeneratedFile for BoundFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file.name)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        self.file.render(self.ctx)
    }
}
