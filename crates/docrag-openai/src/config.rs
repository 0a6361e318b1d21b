//! Client configuration

use serde::Serialize;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use docrag_core::{DEFAULT_EMBEDDING_DIM, Error, Result};

pub const DEFAULT_EMBEDDING_URL: &str = "https://api.euron.one/api/v1/euri/embeddings";
pub const DEFAULT_CHAT_URL: &str = "https://api.euron.one/api/v1/euri/chat/completions";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-nano";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the embedding client
#[derive(Clone, Serialize)]
pub struct EmbeddingConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub dimension: usize,
    pub timeout: Duration,
}

impl EmbeddingConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: api_key_from_env(),
            endpoint: env_or("DOCRAG_EMBEDDING_URL", DEFAULT_EMBEDDING_URL),
            model: env_or("DOCRAG_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            dimension: env_parse("DOCRAG_EMBEDDING_DIM", DEFAULT_EMBEDDING_DIM)?,
            timeout: timeout_from_env()?,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_EMBEDDING_URL.to_string(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            dimension: DEFAULT_EMBEDDING_DIM,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("dimension", &self.dimension)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Configuration for the chat-completion client
#[derive(Clone, Serialize)]
pub struct ChatConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl ChatConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: api_key_from_env(),
            endpoint: env_or("DOCRAG_CHAT_URL", DEFAULT_CHAT_URL),
            model: env_or("DOCRAG_CHAT_MODEL", DEFAULT_CHAT_MODEL),
            timeout: timeout_from_env()?,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_CHAT_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A missing key is left empty; the clients reject it when they are built.
fn api_key_from_env() -> String {
    env::var("DOCRAG_API_KEY")
        .or_else(|_| env::var("EURI_API_KEY"))
        .unwrap_or_default()
}

fn timeout_from_env() -> Result<Duration> {
    env_parse("DOCRAG_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs()).map(Duration::from_secs)
}

/// Read a string variable, falling back to `default` when unset
pub fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            Error::Configuration(format!("{} has invalid value '{}': {}", name, raw, e))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = EmbeddingConfig::new("sk-very-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<redacted>"));

        let chat = ChatConfig::new("sk-very-secret");
        assert!(!format!("{:?}", chat).contains("sk-very-secret"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = EmbeddingConfig::new("key")
            .with_endpoint("http://localhost:9000/embeddings")
            .with_model("tiny")
            .with_dimension(2)
            .with_timeout(Duration::from_millis(250));

        assert_eq!(config.endpoint, "http://localhost:9000/embeddings");
        assert_eq!(config.model, "tiny");
        assert_eq!(config.dimension, 2);
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_env_parse_default_when_unset() {
        let value: usize = env_parse("DOCRAG_TEST_SURELY_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
