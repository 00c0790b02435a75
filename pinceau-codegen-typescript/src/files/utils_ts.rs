//! utils.ts theme utilities module.

use pinceau_core::TokenContext;
use serde_json::Value;

use crate::ast::{Const, DefaultExport, JsObject, Module, TypeAlias};

/// Key of the theme entry holding utility sources.
const UTILS_KEY: &str = "utils";

/// Render the utilities module.
///
/// Utilities are read from `tokens.utils`, an object mapping each utility
/// name to its JavaScript source.
pub fn utils_full(ctx: &TokenContext) -> String {
    let mut utils = JsObject::new();

    if let Some(Value::Object(entries)) = ctx.tokens.get(UTILS_KEY) {
        for (name, source) in entries {
            match source {
                Value::String(source) => utils = utils.property(name, source),
                other => tracing::warn!(util = %name, value = %other, "ignoring non-function util"),
            }
        }
    }

    Module::new()
        .add(Const::new("utils", utils.build()))
        .add(TypeAlias::new("GeneratedPinceauUtils", "typeof utils"))
        .add(DefaultExport::new("utils"))
        .render()
}
