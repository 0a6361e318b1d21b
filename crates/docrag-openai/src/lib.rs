//! OpenAI-compatible clients for docrag
//!
//! This crate provides the HTTP implementations of the `Embedder` and
//! `Generator` traits, plus their environment-driven configuration.

mod chat;
mod config;
mod embedding;
mod http;

#[cfg(test)]
mod test_server;
#[cfg(test)]
mod tests;

pub use chat::{ChatClient, extract_answer};
pub use config::{
    ChatConfig, DEFAULT_CHAT_MODEL, DEFAULT_CHAT_URL, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_EMBEDDING_URL, DEFAULT_TIMEOUT, EmbeddingConfig, env_or, env_parse,
};
pub use embedding::{EmbeddingClient, extract_embedding, parse_embedding_response};

// Re-export core types for convenience
pub use docrag_core::{Embedder, Embedding, Error, Generator, Result};
