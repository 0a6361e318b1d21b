//! Grounded prompt construction

use docrag_core::{Error, Result};

/// Render the question-answering prompt for `query` over `context_chunks`.
///
/// Chunks are trimmed and blank ones skipped; the rest are separated by a
/// blank line.
pub fn build_prompt<S: AsRef<str>>(context_chunks: &[S], query: &str) -> Result<String> {
    if context_chunks.is_empty() {
        return Err(Error::InvalidArgument("Context chunks cannot be empty".to_string()));
    }
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::InvalidArgument("Query must be a non-empty string".to_string()));
    }

    let context = context_chunks
        .iter()
        .map(|chunk| chunk.as_ref().trim())
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    if context.is_empty() {
        return Err(Error::InvalidArgument("All context chunks are empty".to_string()));
    }

    Ok(format!(
        "Given the following context, answer the question below.\nContext:\n{}\nQuestion:\n{}",
        context, query
    ))
}
