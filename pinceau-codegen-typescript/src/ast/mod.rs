//! TypeScript statements for the generated theme modules.
//!
//! Each node renders to its own source lines; [`Module`] joins statements
//! with a blank line between them.

mod consts;
mod exports;
mod objects;
mod types;

pub use consts::Const;
pub use exports::DefaultExport;
pub use objects::JsObject;
pub use types::{TypeAlias, Union};

/// Indentation of nested lines in generated modules.
const INDENT: &str = "  ";

/// A top-level statement of a generated module.
pub trait Statement {
    /// Source lines, without trailing newlines.
    fn lines(&self) -> Vec<String>;
}

/// A generated TypeScript module.
#[derive(Default)]
pub struct Module {
    statements: Vec<Vec<String>>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, statement: impl Statement) -> Self {
        self.statements.push(statement.lines());
        self
    }

    /// Render the module; every line, including the last, ends with `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, lines) in self.statements.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

/// Split a possibly multi-line expression, never returning an empty list.
fn expression_lines(expr: &str) -> Vec<String> {
    let lines: Vec<String> = expr.lines().map(str::to_string).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Prefix the first line and suffix the last one of an expression.
fn wrap_expression(expr: &str, prefix: &str, suffix: &str) -> Vec<String> {
    let mut lines = expression_lines(expr);
    let first = format!("{}{}", prefix, lines[0]);
    lines[0] = first;
    if let Some(last) = lines.last_mut() {
        last.push_str(suffix);
    }
    lines
}
