//! OpenAI API client implementation
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use cassist_core::constants::DEFAULT_BASE_URL;
use cassist_core::AssistantConfig;

/// Errors raised while talking to the chat-completions endpoint
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// OpenAI client builder
pub struct ClientBuilder<'a> {
    api_key: &'a str,
    base_url: Option<&'a str>,
    http_client: reqwest::Client,
}

impl<'a> ClientBuilder<'a> {
    /// Create a new client builder
    pub fn new(api_key: &'a str) -> Self {
        Self {
            api_key,
            base_url: None,
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom base URL, e.g. a local OpenAI-compatible server
    pub fn base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set a custom HTTP client
    pub fn custom_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    /// Build the client
    pub fn build(self) -> Client {
        Client::new(
            self.base_url.unwrap_or(DEFAULT_BASE_URL),
            self.api_key,
            self.http_client,
        )
    }
}

/// OpenAI client
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub api_key: String,
    pub http_client: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

impl Client {
    /// Create a new client
    pub fn new(base_url: impl Into<String>, api_key: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http_client,
        }
    }

    /// Create a new client builder
    pub fn builder(api_key: &str) -> ClientBuilder<'_> {
        ClientBuilder::new(api_key)
    }

    /// Create a client from assistant configuration
    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::builder(&config.api_key)
            .base_url(&config.base_url)
            .build()
    }

    /// Send a POST request to the API
    pub(crate) async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        request: &T,
    ) -> Result<R, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            return Err(ProviderError::Api { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
