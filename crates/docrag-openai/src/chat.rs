//! Chat-completion client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use docrag_core::{Error, Generator, Result};

use crate::config::ChatConfig;
use crate::http::{self, first_entry};

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct ChatClient {
    config: ChatConfig,
    client: Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

impl ChatClient {
    /// Create a new chat client from configuration
    pub fn new(config: ChatConfig) -> Result<Self> {
        let client = http::build_client(&config.api_key, config.timeout)?;
        Ok(Self { config, client })
    }

    /// Create a new chat client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ChatConfig::from_env()?)
    }
}

#[async_trait]
impl Generator for ChatClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(Error::InvalidArgument("Prompt must be a non-empty string".to_string()));
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.config.model, chars = prompt.len(), "requesting completion");
        let response =
            http::post_json(&self.client, &self.config.endpoint, &self.config.api_key, &request)
                .await?;

        extract_answer(&response)
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

/// Pull `choices[0].message.content` out of a decoded response object
pub fn extract_answer(response: &serde_json::Map<String, Value>) -> Result<String> {
    let choice = first_entry(response, "choices")?;

    choice
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| {
            Error::ResponseSchema(format!("First choice has no 'message.content': {}", choice))
        })
}
