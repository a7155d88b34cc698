use serde::{Deserialize, Serialize};

/// A stored process-definition document, keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeModel {
    pub code: String,
    /// The scheme XML
    pub scheme: String,
    #[serde(default)]
    pub can_be_inlined: bool,
    #[serde(default)]
    pub inlined_schemes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SchemeModel {
    pub fn new(code: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            scheme: scheme.into(),
            can_be_inlined: false,
            inlined_schemes: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
