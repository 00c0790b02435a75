//! index.css stylesheet.

use pinceau_core::TokenContext;

/// Placeholder stylesheet written before any token is available.
pub const CSS_STUB: &str = "/* This file is empty because no tokens has been provided. */";

/// The stylesheet is only ever staged as a placeholder; the token pipeline
/// writes the real one.
pub fn css_stub(_ctx: &TokenContext) -> String {
    CSS_STUB.to_string()
}
