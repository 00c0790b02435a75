use super::Statement;

/// `export default <name>;`
#[derive(Debug, Clone)]
pub struct DefaultExport(String);

impl DefaultExport {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Statement for DefaultExport {
    fn lines(&self) -> Vec<String> {
        vec![format!("export default {};", self.0)]
    }
}
