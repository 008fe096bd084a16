use serde::Serialize;
use serde_json::{Map, Value};

/// Configuration passed in by the host, arbitrary keys to arbitrary values
pub type ActionConfig = Map<String, Value>;

/// Structured result fields handed back to the host
pub type ActionFields = Map<String, Value>;

/// Output of a single action run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutput {
    /// Human-readable text shown to the model
    pub text: String,
    /// Structured result fields
    pub fields: ActionFields,
}

impl ActionOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fields: ActionFields::new(),
        }
    }

    /// Split into the `(text, fields)` pair the host consumes
    pub fn into_parts(self) -> (String, ActionFields) {
        (self.text, self.fields)
    }
}
