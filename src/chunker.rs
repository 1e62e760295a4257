/// Upper bound on chunk length, sized to respect the model's input
/// limit.
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

/// Splits text into contiguous, non-overlapping pieces of at most
/// `chunk_size` characters, covering the whole input in order. Counting
/// is per character, never splitting a multi-byte sequence. Empty input
/// yields no chunks.
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    if chunk_size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == chunk_size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(split_into_chunks("", 8).is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        assert_eq!(split_into_chunks("hello", 8), vec!["hello"]);
    }

    #[test]
    fn chunks_cover_input_exactly() {
        let text = "abcdefghij";
        let chunks = split_into_chunks(text, 3);
        assert_eq!(chunks, vec!["abc", "def", "ghi", "j"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn all_chunks_but_last_are_full_size() {
        let text: String = std::iter::repeat('x').take(100).collect();
        let chunks = split_into_chunks(&text, 7);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 7);
        }
        assert_eq!(
            chunks.iter().map(|c| c.chars().count()).sum::<usize>(),
            100
        );
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let text = "日本語のテキスト";
        let chunks = split_into_chunks(text, 3);
        assert_eq!(chunks.concat(), text);
        assert_eq!(chunks[0].chars().count(), 3);
    }
}
