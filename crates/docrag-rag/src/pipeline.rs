//! Retrieval + generation

use serde::{Deserialize, Serialize};
use tracing::info;

use docrag_core::{Chunk, Embedder, Generator, Result, VectorIndex};

use crate::prompt::build_prompt;
use crate::retriever::Retriever;

/// A generated answer together with the chunks that grounded it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub context: Vec<Chunk>,
}

/// Answers questions about one indexed document
pub struct RagPipeline<I: VectorIndex, E: Embedder, G: Generator> {
    retriever: Retriever<I, E>,
    generator: G,
    top_k: usize,
}

impl<I: VectorIndex, E: Embedder, G: Generator> RagPipeline<I, E, G> {
    pub fn new(retriever: Retriever<I, E>, generator: G, top_k: usize) -> Self {
        Self {
            retriever,
            generator,
            top_k,
        }
    }

    pub fn retriever(&self) -> &Retriever<I, E> {
        &self.retriever
    }

    /// Top-k chunks for `query` without calling the generator
    pub async fn context(&self, query: &str) -> Result<Vec<Chunk>> {
        self.retriever.retrieve(query, self.top_k).await
    }

    pub async fn answer(&self, query: &str) -> Result<Answer> {
        let context = self.context(query).await?;
        let prompt = build_prompt(context.as_slice(), query)?;
        info!(
            chunks = context.len(),
            model = self.generator.model_id(),
            "Generating answer"
        );
        let answer = self.generator.generate(&prompt).await?;
        Ok(Answer { answer, context })
    }
}
