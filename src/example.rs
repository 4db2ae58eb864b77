//! Bundled sample text for trying the colorizer without any input.

/// Multi-paragraph prose with a spread of sentence lengths
pub const EXAMPLE_TEXT: &str = include_str!("../assets/example.txt");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorizer::{colorize_text, LengthRankMap};

    #[test]
    fn test_example_has_many_distinct_lengths() {
        let sentences = colorize_text(EXAMPLE_TEXT);
        let ranks = LengthRankMap::from_lengths(sentences.iter().map(|s| s.length));
        assert!(sentences.len() > 10);
        assert!(ranks.distinct_count() > 5);
        // Some sentences run past nine words, which exercises numeric ordering
        assert!(ranks.iter().any(|(length, _)| length >= 10));
    }
}
