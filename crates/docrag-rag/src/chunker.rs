//! Word-window chunking

use docrag_core::{Chunk, Error, Result};

/// Words per chunk when no size is configured
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Split `text` into consecutive windows of at most `max_words` words.
///
/// Words are separated by runs of whitespace and each window is re-joined
/// with single spaces. Text that already fits in one window is returned
/// trimmed but otherwise untouched.
pub fn chunk_text(text: &str, max_words: usize) -> Result<Vec<Chunk>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "text cannot be empty or whitespace-only".to_string(),
        ));
    }
    if max_words < 1 {
        return Err(Error::InvalidArgument("max_words must be at least 1".to_string()));
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() <= max_words {
        return Ok(vec![trimmed.to_string()]);
    }

    Ok(words.chunks(max_words).map(|window| window.join(" ")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_trimmed_chunk() {
        let chunks = chunk_text("  A short\ttext \n", 5).unwrap();
        assert_eq!(chunks, vec!["A short\ttext".to_string()]);
    }

    #[test]
    fn test_exact_fit_is_single_chunk() {
        let chunks = chunk_text("one two three", 3).unwrap();
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn test_one_word_per_chunk() {
        assert_eq!(chunk_text("Hello world", 1).unwrap(), vec!["Hello", "world"]);
    }

    #[test]
    fn test_windows_with_short_tail() {
        let chunks = chunk_text("A B C D E", 2).unwrap();
        assert_eq!(chunks, vec!["A B", "C D", "E"]);
    }

    #[test]
    fn test_whitespace_runs_collapse_across_chunks() {
        let chunks = chunk_text("a\n\n b\t\tc   d", 3).unwrap();
        assert_eq!(chunks, vec!["a b c", "d"]);
    }

    #[test]
    fn test_chunk_count_and_word_order() {
        let words: Vec<String> = (0..257).map(|i| format!("w{}", i)).collect();
        let text = words.join(" ");

        let chunks = chunk_text(&text, 100).unwrap();
        assert_eq!(chunks.len(), 257_usize.div_ceil(100));
        assert!(chunks.iter().all(|c| c.split_whitespace().count() <= 100));

        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
        assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_text_is_invalid() {
        assert!(matches!(chunk_text("", 5), Err(Error::InvalidArgument(_))));
        assert!(matches!(chunk_text(" \n\t ", 5), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_max_words_is_invalid() {
        assert!(matches!(chunk_text("some text", 0), Err(Error::InvalidArgument(_))));
    }
}
