//! `IntentExtractor` backed by the chat-completions API

use anyhow::Result;
use cassist_core::{AssistantConfig, IntentExtractor};
use cassist_types::ExtractorOutput;
use tracing::{debug, info, instrument};

use crate::prompt::system_message;
use crate::providers::openai::{
    ChatCompletionRequest, ChatMessage, Client, CompletionResponse, OpenAiToolDefinition,
};
use crate::tools::operation_tools;

/// Sends the user's text with the system prompt and the operation schemas,
/// letting the model pick a tool automatically.
#[derive(Debug)]
pub struct OpenAiExtractor {
    client: Client,
    model: String,
    system_message: String,
}

impl OpenAiExtractor {
    pub fn new(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            system_message: system_message(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(Client::from_config(config), &config.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request body for one user message.
    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_message.clone()),
                ChatMessage::user(text),
            ],
            tools: operation_tools()
                .into_iter()
                .map(OpenAiToolDefinition::from)
                .collect(),
            tool_choice: "auto".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IntentExtractor for OpenAiExtractor {
    #[instrument(skip(self, text), fields(model = %self.model))]
    async fn extract_intent(&self, text: &str) -> Result<ExtractorOutput> {
        info!("Extracting intent via chat completions");
        debug!("User text: {}", text);

        let request = self.build_request(text);
        let response: CompletionResponse = self.client.post("chat/completions", &request).await?;
        let output = ExtractorOutput::try_from(response)?;

        debug!("Extractor output: {:?}", output);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let extractor = OpenAiExtractor::new(Client::builder("sk-test").build(), "gpt-4o-mini");
        let request = extractor.build_request("Swap 100 ETH for USDT");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["tool_choice"], "auto");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Swap 100 ETH for USDT");
        assert_eq!(value["tools"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["tools"][1]["function"]["name"], "bridge");
    }

    #[test]
    fn test_from_config_uses_model() {
        let config = AssistantConfig::new("sk-test").with_model("gpt-4o");
        let extractor = OpenAiExtractor::from_config(&config);
        assert_eq!(extractor.model(), "gpt-4o");
    }
}
