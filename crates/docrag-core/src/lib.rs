//! Core traits and types for docrag
//!
//! This crate defines the vocabulary shared by the retrieval pipeline: the
//! error taxonomy, chunk and embedding types, and the capability-facing
//! interfaces for embedding providers, similarity indexes and answer
//! generators.

pub mod embedder;
pub mod error;
pub mod generator;
pub mod types;
pub mod vector_index;

#[cfg(test)]
mod tests;

pub use embedder::Embedder;
pub use error::{Error, Result};
pub use generator::Generator;
pub use types::*;
pub use vector_index::VectorIndex;
