//! Query-time retrieval

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use docrag_core::{Chunk, ChunkMapping, Embedder, Error, Result, VectorIndex};

/// A retrieved chunk with its rank data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub position: usize,
    pub distance: f32,
    pub text: Chunk,
}

/// Embed `query` and return the `k` nearest chunks, closest first.
///
/// `k` is clamped to the mapping size. Positions the index reports outside
/// the mapping are dropped rather than looked up.
pub async fn retrieve_top_k<I, E>(
    query: &str,
    index: &I,
    mapping: &ChunkMapping,
    k: usize,
    embedder: &E,
) -> Result<Vec<RetrievedChunk>>
where
    I: VectorIndex + ?Sized,
    E: Embedder + ?Sized,
{
    if query.trim().is_empty() {
        return Err(Error::InvalidArgument("Query must be a non-empty string".to_string()));
    }
    if k == 0 {
        return Err(Error::InvalidArgument("k must be a positive integer".to_string()));
    }
    let k = k.min(mapping.len());

    let embedding = embedder.embed(query).await?;
    if embedding.len() != index.dimension() {
        return Err(Error::dimension_mismatch(
            format!("query '{}'", query),
            index.dimension(),
            embedding.len(),
        ));
    }

    let hits = index.search(&embedding, k)?;
    debug!(k, hits = hits.len(), "Searched index");

    Ok(hits
        .into_iter()
        .filter_map(|hit| {
            mapping.get(hit.position).map(|text| RetrievedChunk {
                position: hit.position,
                distance: hit.distance,
                text: text.clone(),
            })
        })
        .collect())
}

/// Owns an index, its chunk mapping and the embedder used for queries
pub struct Retriever<I: VectorIndex, E: Embedder> {
    index: I,
    mapping: ChunkMapping,
    embedder: Arc<E>,
}

impl<I: VectorIndex, E: Embedder> Retriever<I, E> {
    /// Pair an index with its mapping; both must describe the same chunks
    pub fn new(index: I, mapping: ChunkMapping, embedder: Arc<E>) -> Result<Self> {
        if mapping.len() != index.count() {
            return Err(Error::Consistency(format!(
                "mapping holds {} chunks but the index holds {} vectors",
                mapping.len(),
                index.count()
            )));
        }
        Ok(Self {
            index,
            mapping,
            embedder,
        })
    }

    /// The `k` most relevant chunks, ordered by similarity
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Chunk>> {
        let scored = self.retrieve_scored(query, k).await?;
        Ok(scored.into_iter().map(|chunk| chunk.text).collect())
    }

    /// Like [`Retriever::retrieve`], keeping positions and distances
    pub async fn retrieve_scored(&self, query: &str, k: usize) -> Result<Vec<RetrievedChunk>> {
        retrieve_top_k(query, &self.index, &self.mapping, k, self.embedder.as_ref()).await
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn mapping(&self) -> &ChunkMapping {
        &self.mapping
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
