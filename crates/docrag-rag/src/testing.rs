//! Test doubles shared by the crate's unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use docrag_core::{Embedder, Embedding, Error, Generator, Result};

/// Embedder answering from a fixed text → vector table
pub(crate) struct FixedEmbedder {
    vectors: HashMap<String, Embedding>,
    calls: AtomicUsize,
}

impl FixedEmbedder {
    pub fn new(entries: Vec<(&str, Embedding)>) -> Self {
        Self {
            vectors: entries
                .into_iter()
                .map(|(text, vector)| (text.to_string(), vector))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for FixedEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| Error::InvalidArgument(format!("no fixture vector for '{}'", text)))
    }

    fn model_id(&self) -> &str {
        "fixed"
    }
}

/// Vectors for the "A B C D E" document chunked two words at a time
pub(crate) fn letter_embedder() -> FixedEmbedder {
    FixedEmbedder::new(vec![
        ("A B", vec![0.0, 0.0]),
        ("C D", vec![1.0, 1.0]),
        ("E", vec![2.0, 2.0]),
        ("what about C and D?", vec![1.0, 1.0]),
        ("far away", vec![10.0, 10.0]),
        ("wrong size", vec![1.0, 1.0, 1.0]),
    ])
}

/// Generator that echoes the prompt it was given
pub(crate) struct EchoGenerator;

#[async_trait]
impl Generator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(format!("echo: {}", prompt))
    }

    fn model_id(&self) -> &str {
        "echo"
    }
}
