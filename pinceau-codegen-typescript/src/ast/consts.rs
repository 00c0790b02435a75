use super::{Statement, wrap_expression};

/// An exported `const` declaration.
///
/// Multi-line values keep their own indentation; only the first line gets
/// the declaration and only the last one the terminator.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    as_const: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            as_const: false,
        }
    }

    /// Append an `as const` assertion so literal types are kept.
    pub fn as_const(mut self) -> Self {
        self.as_const = true;
        self
    }
}

impl Statement for Const {
    fn lines(&self) -> Vec<String> {
        let suffix = if self.as_const { " as const;" } else { ";" };
        wrap_expression(
            &self.value,
            &format!("export const {} = ", self.name),
            suffix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(
            Const::new("utils", "{}").lines(),
            ["export const utils = {};"]
        );
    }

    #[test]
    fn test_as_const_multiline() {
        let lines = Const::new("theme", "{\n  \"gap\": \"4px\"\n}")
            .as_const()
            .lines();
        assert_eq!(
            lines,
            ["export const theme = {", "  \"gap\": \"4px\"", "} as const;"]
        );
    }
}
