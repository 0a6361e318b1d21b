//! Embedding client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use docrag_core::{Embedder, Embedding, Error, Result};

use crate::config::EmbeddingConfig;
use crate::http::{self, first_entry, json_type};

/// Client for OpenAI-compatible `/embeddings` endpoints
pub struct EmbeddingClient {
    config: EmbeddingConfig,
    client: Client,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

impl EmbeddingClient {
    /// Model constants
    pub const TEXT_EMBEDDING_3_SMALL: &'static str = "text-embedding-3-small";
    pub const TEXT_EMBEDDING_3_LARGE: &'static str = "text-embedding-3-large";

    /// Create a new embedding client from configuration
    pub fn new(config: EmbeddingConfig) -> Result<Self> {
        let client = http::build_client(&config.api_key, config.timeout)?;
        Ok(Self { config, client })
    }

    /// Create a new embedding client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(EmbeddingConfig::from_env()?)
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        if text.is_empty() {
            return Err(Error::InvalidArgument("Text must be a non-empty string".to_string()));
        }

        let request = EmbeddingRequest {
            input: text,
            model: &self.config.model,
        };

        debug!(model = %self.config.model, chars = text.len(), "requesting embedding");
        let response =
            http::post_json(&self.client, &self.config.endpoint, &self.config.api_key, &request)
                .await?;

        extract_embedding(&response)
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

/// Pull the first result's vector out of a decoded response object
pub fn extract_embedding(response: &serde_json::Map<String, Value>) -> Result<Embedding> {
    let entry = first_entry(response, "data")?;

    let values = entry
        .get("embedding")
        .ok_or_else(|| {
            Error::ResponseSchema(format!("First data entry has no 'embedding' field: {}", entry))
        })?
        .as_array()
        .ok_or_else(|| {
            Error::ResponseSchema(format!(
                "'embedding' must be an array, got {}",
                json_type(&entry["embedding"])
            ))
        })?;

    values
        .iter()
        .map(|value| {
            value.as_f64().map(|x| x as f32).ok_or_else(|| {
                Error::ResponseSchema(format!("'embedding' contains a non-numeric value: {}", value))
            })
        })
        .collect()
}

/// Decode a raw response body into an embedding
pub fn parse_embedding_response(body: &str) -> Result<Embedding> {
    extract_embedding(&http::parse_object(body)?)
}
