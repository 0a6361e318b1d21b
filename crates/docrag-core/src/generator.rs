//! Answer generation trait

use async_trait::async_trait;

use crate::Result;

/// Trait for language models that answer a grounded prompt
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate an answer for a fully rendered prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
