//! Fixed-size text chunking for index construction.
//!
//! Windows of `CHUNK_SIZE` characters advance by `CHUNK_SIZE - CHUNK_OVERLAP`
//! so adjacent chunks share `CHUNK_OVERLAP` characters of context. Applied
//! uniformly regardless of document structure; splitting on char boundaries
//! keeps multi-byte text safe.

/// Chunk length in characters.
pub const CHUNK_SIZE: usize = 500;

/// Characters shared between adjacent chunks.
pub const CHUNK_OVERLAP: usize = 50;

/// Splits `text` into overlapping fixed-size windows.
/// Whitespace-only windows are dropped; text shorter than one window yields a
/// single chunk.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || size == 0 {
        return Vec::new();
    }

    // Guard against a non-advancing window if overlap >= size.
    let step = size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        let chunk: String = chars[start..end].iter().collect();
        if !chunk.trim().is_empty() {
            chunks.push(chunk);
        }
        if end == chars.len() {
            break;
        }
        start += step;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_yields_single_chunk() {
        let chunks = chunk_text("hello world", CHUNK_SIZE, CHUNK_OVERLAP);
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(chunk_text("", CHUNK_SIZE, CHUNK_OVERLAP).is_empty());
        assert!(chunk_text("   \n\t  ", CHUNK_SIZE, CHUNK_OVERLAP).is_empty());
    }

    #[test]
    fn test_adjacent_chunks_share_overlap() {
        let text: String = ('a'..='z').cycle().take(1200).collect();
        let chunks = chunk_text(&text, 500, 50);

        assert_eq!(chunks[0].chars().count(), 500);
        let tail_of_first: String = chunks[0].chars().skip(450).collect();
        let head_of_second: String = chunks[1].chars().take(50).collect();
        assert_eq!(tail_of_first, head_of_second);
    }

    #[test]
    fn test_window_arithmetic_covers_whole_text() {
        // 1200 chars, step 450: windows at 0, 450, 900 -> 3 chunks.
        let text = "x".repeat(1200);
        let chunks = chunk_text(&text, 500, 50);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].chars().count(), 300);
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let text = "é".repeat(600);
        let chunks = chunk_text(&text, 500, 50);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 500);
    }

    #[test]
    fn test_degenerate_overlap_still_advances() {
        // overlap >= size must not loop forever.
        let text = "abcdef";
        let chunks = chunk_text(text, 2, 5);
        assert!(!chunks.is_empty());
        assert_eq!(chunks[0], "ab");
    }
}
