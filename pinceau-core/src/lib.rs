//! Core types for the Pinceau theme output stager.
//!
//! This crate provides the generated-file abstraction and the token
//! context handed to output generators.

mod file;
mod tokens;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Token context
pub use tokens::{Token, TokenContext};
