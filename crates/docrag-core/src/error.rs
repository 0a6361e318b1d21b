//! Error types for docrag

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the retrieval pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Remote service error (status {status}): {body}")]
    RemoteService { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response schema error: {0}")]
    ResponseSchema(String),

    #[error("Embedding dimension mismatch for {subject}: expected {expected} dimensions, got {actual}")]
    DimensionMismatch {
        subject: String,
        expected: usize,
        actual: usize,
    },

    #[error("Consistency error: {0}")]
    Consistency(String),

    #[error("Source document {} does not exist", .0.display())]
    MissingSource(PathBuf),

    #[error("Corrupt index: {0}")]
    CorruptIndex(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a dimension mismatch on a named piece of text
    pub fn dimension_mismatch(subject: impl Into<String>, expected: usize, actual: usize) -> Self {
        Error::DimensionMismatch {
            subject: subject.into(),
            expected,
            actual,
        }
    }
}
