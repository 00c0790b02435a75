use super::{INDENT, wrap_expression};

/// An object literal whose property values are raw JavaScript expressions.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property; `value` is emitted as is.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Build the literal as an expression, without a trailing newline.
    /// Empty objects render inline as `{}`.
    pub fn build(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }

        let mut lines = vec!["{".to_string()];
        for (key, value) in &self.properties {
            // The comma lands on the last line of a multi-line value
            let prefix = format!("{}: ", object_key(key));
            lines.extend(
                wrap_expression(value, &prefix, ",")
                    .into_iter()
                    .map(|line| format!("{INDENT}{line}")),
            );
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

/// Key as written in source: bare when it is a valid identifier,
/// quoted otherwise.
fn object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        serde_json::Value::String(key.to_string()).to_string()
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}");
    }

    #[test]
    fn test_properties() {
        let obj = JsObject::new()
            .property("px", "(value) => `${value}px`")
            .property("my-util", "() => ({})");
        assert_eq!(
            obj.build(),
            "{\n  px: (value) => `${value}px`,\n  \"my-util\": () => ({}),\n}"
        );
    }

    #[test]
    fn test_multiline_property() {
        let obj = JsObject::new().property("mx", "(value) => ({\n  marginLeft: value,\n})");
        assert_eq!(
            obj.build(),
            "{\n  mx: (value) => ({\n    marginLeft: value,\n  }),\n}"
        );
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("px"));
        assert!(is_identifier("$dark"));
        assert!(is_identifier("_a1"));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("my-util"));
        assert!(!is_identifier(""));
    }
}
