use super::Statement;

/// An exported type alias, e.g. `export type GeneratedPinceauTheme = typeof theme;`.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Statement for TypeAlias {
    fn lines(&self) -> Vec<String> {
        vec![format!("export type {} = {};", self.name, self.ty)]
    }
}

/// An exported union of literal types. No variants means `never`.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

impl Statement for Union {
    fn lines(&self) -> Vec<String> {
        let ty = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        TypeAlias::new(&self.name, ty).lines()
    }
}
