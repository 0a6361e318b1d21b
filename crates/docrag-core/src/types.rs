//! Common types shared across the retrieval pipeline

use serde::{Deserialize, Serialize};

/// Dimension of `text-embedding-3-small` vectors
pub const DEFAULT_EMBEDDING_DIM: usize = 1536;

/// A contiguous, word-bounded slice of the source document
pub type Chunk = String;

/// Dense vector representation of a piece of text
pub type Embedding = Vec<f32>;

/// Ordered chunks whose position `i` is the `i`-th vector of the index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkMapping(Vec<Chunk>);

impl ChunkMapping {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self(chunks)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Chunk stored at an index position, if the position is in range
    pub fn get(&self, position: usize) -> Option<&Chunk> {
        self.0.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Chunk] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Chunk> {
        self.0
    }
}

impl From<Vec<Chunk>> for ChunkMapping {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self(chunks)
    }
}

/// One nearest-neighbor match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 0-based position in the index
    pub position: usize,
    /// Squared Euclidean distance to the query
    pub distance: f32,
}

impl SearchHit {
    pub fn new(position: usize, distance: f32) -> Self {
        Self { position, distance }
    }
}
