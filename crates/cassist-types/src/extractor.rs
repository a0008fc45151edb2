//! Output contract of the intent extractor.

use serde::{Deserialize, Serialize};

/// A function call selected by the extractor.
///
/// `arguments` is kept as the raw JSON text returned by the service so that
/// malformed encodings surface during decoding instead of inside the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Everything the extractor can hand back for a single user request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExtractorOutput {
    /// The model chose one of the two operation functions
    FunctionCall(FunctionCall),
    /// The model answered in free text (guidance, clarification, refusal)
    PlainText(String),
}

impl ExtractorOutput {
    pub fn function_call(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self::FunctionCall(FunctionCall::new(name, arguments))
    }

    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }
}
