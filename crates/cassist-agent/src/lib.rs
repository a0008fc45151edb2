//! Cassist Agent
//!
//! Intent extraction backed by an OpenAI-compatible chat-completions API. The
//! user's text is sent together with a fixed system prompt and the `swap` and
//! `bridge` tool schemas; the model's tool selection (or free-text answer) is
//! returned as an [`ExtractorOutput`](cassist_types::ExtractorOutput).

pub mod extractor;
pub mod prompt;
pub mod providers;
pub mod tools;

pub use extractor::OpenAiExtractor;
pub use providers::openai::{Client, ProviderError};
