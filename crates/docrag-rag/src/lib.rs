//! Retrieval engine for docrag
//!
//! This crate provides the word-window chunker, the exact flat L2 index,
//! the on-disk artifact store, the query-time retriever and the prompt
//! builder that together answer questions about a single document.

mod chunker;
mod config;
mod flat_index;
mod pipeline;
mod prompt;
mod retriever;
mod store;

#[cfg(test)]
mod testing;

pub use chunker::{DEFAULT_MAX_WORDS, chunk_text};
pub use config::{DEFAULT_DATA_FILE, DEFAULT_INDEX_DIR, DEFAULT_TOP_K, RagConfig};
pub use flat_index::FlatL2Index;
pub use pipeline::{Answer, RagPipeline};
pub use prompt::build_prompt;
pub use retriever::{RetrievedChunk, Retriever, retrieve_top_k};
pub use store::{IndexStore, embed_chunks, read_mapping, write_mapping};

// Re-export core types for convenience
pub use docrag_core::{
    Chunk, ChunkMapping, Embedder, Embedding, Error, Generator, Result, SearchHit, VectorIndex,
};
