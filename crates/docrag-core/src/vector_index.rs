//! Vector index trait

use std::path::Path;

use crate::{Embedding, Result, SearchHit};

/// Trait for similarity indexes over fixed-dimension embeddings
///
/// Positions are 0-based and assigned in insertion order. Indexes are
/// append-only while being built and are never updated once persisted.
pub trait VectorIndex: Send + Sync {
    /// Dimension every stored and queried vector must have
    fn dimension(&self) -> usize;

    /// Number of stored vectors
    fn count(&self) -> usize;

    /// Append a vector and return its position
    fn add(&mut self, embedding: Embedding) -> Result<usize>;

    /// The `k` nearest stored vectors, closest first
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>>;

    /// Write the index to durable storage
    fn persist(&self, path: &Path) -> Result<()>;

    /// Read an index previously written with [`VectorIndex::persist`]
    fn load(path: &Path) -> Result<Self>
    where
        Self: Sized;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
