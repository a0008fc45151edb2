//! OpenAI-compatible chat-completions provider

pub mod client;
pub mod completion;

pub use client::{Client, ClientBuilder, ProviderError};
pub use completion::{
    ChatCompletionRequest, ChatMessage, Choice, CompletionResponse, Function, OpenAiToolDefinition,
    ToolCall, ToolType, Usage,
};
