//! Token context passed to output generators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single flattened design token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token name, e.g. `color-primary`.
    pub name: String,
    /// Path segments inside the theme, e.g. `["color", "primary"]`.
    #[serde(default)]
    pub path: Vec<String>,
    /// Resolved value.
    pub value: Value,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        path: impl IntoIterator<Item = impl Into<String>>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into_iter().map(Into::into).collect(),
            value: value.into(),
        }
    }

    /// Dotted path used to reference the token, e.g. `color.primary`.
    ///
    /// Falls back to the name when the token carries no path.
    pub fn dotted_path(&self) -> String {
        if self.path.is_empty() {
            self.name.clone()
        } else {
            self.path.join(".")
        }
    }
}

/// Input handed to every output generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenContext {
    /// Theme tree keyed by top-level name.
    #[serde(default)]
    pub tokens: IndexMap<String, Value>,
    /// Every token flattened out of the theme tree.
    #[serde(default)]
    pub all_tokens: Vec<Token>,
}

impl TokenContext {
    /// The placeholder context: no tokens at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.all_tokens.is_empty()
    }
}
