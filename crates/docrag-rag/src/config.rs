//! Pipeline configuration

use std::path::PathBuf;

use docrag_core::Result;
use docrag_openai::{ChatConfig, EmbeddingConfig, env_or, env_parse};

use crate::chunker::DEFAULT_MAX_WORDS;

pub const DEFAULT_INDEX_DIR: &str = "faiss_store";
pub const DEFAULT_DATA_FILE: &str = "data/founder_story.txt";
pub const DEFAULT_TOP_K: usize = 3;

/// Everything the pipeline needs, constructed once and passed down
#[derive(Debug, Clone)]
pub struct RagConfig {
    pub embedding: EmbeddingConfig,
    pub chat: ChatConfig,
    pub index_dir: PathBuf,
    pub data_file: PathBuf,
    pub max_words: usize,
    pub top_k: usize,
}

impl RagConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            embedding: EmbeddingConfig::from_env()?,
            chat: ChatConfig::from_env()?,
            index_dir: PathBuf::from(env_or("DOCRAG_INDEX_DIR", DEFAULT_INDEX_DIR)),
            data_file: PathBuf::from(env_or("DOCRAG_DATA_FILE", DEFAULT_DATA_FILE)),
            max_words: env_parse("DOCRAG_MAX_WORDS", DEFAULT_MAX_WORDS)?,
            top_k: env_parse("DOCRAG_TOP_K", DEFAULT_TOP_K)?,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            embedding: EmbeddingConfig::new(api_key.clone()),
            chat: ChatConfig::new(api_key),
            index_dir: PathBuf::from(DEFAULT_INDEX_DIR),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_words: DEFAULT_MAX_WORDS,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_index_dir(mut self, index_dir: impl Into<PathBuf>) -> Self {
        self.index_dir = index_dir.into();
        self
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Dimension every chunk and query embedding must have
    pub fn dimension(&self) -> usize {
        self.embedding.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RagConfig::new("key");
        assert_eq!(config.max_words, 100);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.dimension(), 1536);
        assert_eq!(config.index_dir, PathBuf::from("faiss_store"));
        assert!(!format!("{:?}", config).contains("\"key\""));
    }

    #[test]
    fn test_overrides() {
        let config = RagConfig::new("key")
            .with_index_dir("/tmp/idx")
            .with_data_file("doc.txt")
            .with_max_words(20)
            .with_top_k(5);
        assert_eq!(config.index_dir, PathBuf::from("/tmp/idx"));
        assert_eq!(config.data_file, PathBuf::from("doc.txt"));
        assert_eq!((config.max_words, config.top_k), (20, 5));
    }
}
