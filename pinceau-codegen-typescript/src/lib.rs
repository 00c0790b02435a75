//! TypeScript outputs and output staging for Pinceau.
//!
//! Before the token pipeline runs, a bundler may already import the
//! generated theme. The [`stager`] makes sure the output directory exists
//! and holds placeholder files so those imports resolve.
//!
//! ```ignore
//! use pinceau_codegen_typescript::stager;
//! use pinceau_config::PinceauOptions;
//!
//! let staged = stager::prepare_output_dir(&PinceauOptions::default(), &root)?;
//! // staged.dir == root/node_modules/.vite/pinceau
//! ```
//!
//! # Generated Output
//!
//! - `index.css` - Theme stylesheet (comment-only placeholder)
//! - `index.ts` - Theme object and its types
//! - `utils.ts` - Theme utility functions

pub mod ast;
pub mod files;
pub mod stager;

pub use ast::Module;
pub use files::{CSS_STUB, OUTPUT_FILES, OutputFile, css_stub, ts_full, utils_full};
pub use stager::{StagedFile, StagedOutput, prepare_output_dir, stub_outputs};
