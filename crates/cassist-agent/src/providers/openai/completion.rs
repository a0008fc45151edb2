//! Chat-completion request and response types

use cassist_types::{ExtractorOutput, FunctionCall};
use rig::completion::ToolDefinition;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::client::ProviderError;

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<OpenAiToolDefinition>,
    pub tool_choice: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::System {
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolCall {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub r#type: ToolType,
    pub function: Function,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    /// Normally a JSON-encoded string; some compatible servers send an object.
    pub arguments: serde_json::Value,
}

impl Function {
    /// Arguments as raw JSON text.
    pub fn arguments_text(&self) -> String {
        match &self.arguments {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Function,
}

#[derive(Serialize, Debug)]
pub struct OpenAiToolDefinition {
    #[serde(rename = "type")]
    pub r#type: ToolType,
    pub function: ToolDefinition,
}

impl From<ToolDefinition> for OpenAiToolDefinition {
    fn from(value: ToolDefinition) -> Self {
        Self {
            r#type: ToolType::Function,
            function: value,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

impl TryFrom<CompletionResponse> for ExtractorOutput {
    type Error = ProviderError;

    fn try_from(value: CompletionResponse) -> Result<Self, Self::Error> {
        if let Some(usage) = &value.usage {
            debug!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let choice = value
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("No choices in response".to_string()))?;

        let (content, tool_calls) = match choice.message {
            ChatMessage::Assistant {
                content,
                tool_calls,
            } => (content, tool_calls.unwrap_or_default()),
            other => {
                return Err(ProviderError::InvalidResponse(format!(
                    "Expected an assistant message, got {other:?}"
                )))
            }
        };

        if tool_calls.len() > 1 {
            warn!(
                "Model returned {} tool calls, using the first",
                tool_calls.len()
            );
        }

        match tool_calls.into_iter().next() {
            Some(call) => Ok(ExtractorOutput::FunctionCall(FunctionCall::new(
                call.function.name.clone(),
                call.function.arguments_text(),
            ))),
            None => Ok(ExtractorOutput::PlainText(content.unwrap_or_default())),
        }
    }
}
