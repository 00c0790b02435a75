//! index.ts theme module.

use indexmap::IndexSet;
use pinceau_core::TokenContext;

use crate::ast::{Const, DefaultExport, Module, TypeAlias, Union};

/// Render the theme module: the theme object, its type and the union of
/// every token path.
pub fn ts_full(ctx: &TokenContext) -> String {
    let theme = serde_json::to_string_pretty(&ctx.tokens).unwrap_or_else(|_| "{}".to_string());

    let paths: IndexSet<String> = ctx
        .all_tokens
        .iter()
        .map(|token| serde_json::Value::String(token.dotted_path()).to_string())
        .collect();

    Module::new()
        .add(Const::new("theme", theme).as_const())
        .add(TypeAlias::new("GeneratedPinceauTheme", "typeof theme"))
        .add(Union::new("GeneratedPinceauPaths", paths))
        .add(DefaultExport::new("theme"))
        .render()
}

#[cfg(test)]
mod tests {
    use pinceau_core::Token;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_context() {
        let code = ts_full(&TokenContext::empty());
        assert_eq!(
            code,
            "export const theme = {} as const;\n\
             \n\
             export type GeneratedPinceauTheme = typeof theme;\n\
             \n\
             export type GeneratedPinceauPaths = never;\n\
             \n\
             export default theme;\n"
        );
    }

    #[test]
    fn test_theme_and_paths() {
        let mut ctx = TokenContext::empty();
        ctx.tokens
            .insert("color".to_string(), json!({ "primary": "#ff0000" }));
        ctx.all_tokens
            .push(Token::new("color-primary", ["color", "primary"], "#ff0000"));
        ctx.all_tokens
            .push(Token::new("color-primary", ["color", "primary"], "#ff0000"));

        let code = ts_full(&ctx);
        assert!(code.starts_with(
            "export const theme = {\n  \"color\": {\n    \"primary\": \"#ff0000\"\n  }\n} as const;\n"
        ));
        assert!(code.contains("export type GeneratedPinceauPaths = \"color.primary\";\n"));
    }

    #[test]
    fn test_theme_keeps_nested_key_order() {
        let mut ctx = TokenContext::empty();
        ctx.tokens.insert(
            "color".to_string(),
            json!({ "zeta": "#000000", "alpha": "#ffffff" }),
        );
        ctx.tokens.insert("space".to_string(), json!({ "sm": "4px" }));

        let code = ts_full(&ctx);
        insta::assert_snapshot!(code.lines().take(9).collect::<Vec<_>>().join("\n"), @r##"
        export const theme = {
          "color": {
            "zeta": "#000000",
            "alpha": "#ffffff"
          },
          "space": {
            "sm": "4px"
          }
        } as const;
        "##);
    }
}
