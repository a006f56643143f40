use serde::{Deserialize, Serialize};

/// One entry of the import-graph JSON: a dotted name, a size, and the names it imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub name: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub imports: Vec<String>,
}

impl NamedRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0.0,
            imports: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }
}
