//! Embedder trait

use async_trait::async_trait;

use crate::{Embedding, Result};

/// Trait for embedding providers (e.g., OpenAI-compatible endpoints)
///
/// One call produces one vector for one text. Implementations do not cache,
/// retry or batch.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single non-empty text
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
