// WHY: single-pass scanner over char boundaries; returns slices of the input so the
// split is a lossless partition and nothing is allocated per sentence

use tracing::debug;

use super::BoundaryRules;

/// Split text into sentences: a run of non-terminal characters followed by one
/// or more terminal characters. Sentences borrow from `text` and concatenate back
/// to it exactly.
///
/// A terminal run at the very start of the text stays attached to the first
/// sentence, trailing text without a terminator becomes the last sentence, and
/// text with no terminator at all (including the empty string) is returned as a
/// single sentence.
pub fn split_sentences<'a>(text: &'a str, rules: &BoundaryRules) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    // WHY: a boundary needs body text before the terminator run, otherwise
    // leading punctuation would be emitted as its own empty-word sentence
    let mut seen_body = false;
    let mut in_terminals = false;

    for (byte_pos, ch) in text.char_indices() {
        if rules.is_terminal(ch) {
            in_terminals = true;
            continue;
        }

        if in_terminals && seen_body {
            sentences.push(&text[start..byte_pos]);
            start = byte_pos;
        }

        in_terminals = false;
        seen_body = true;
    }

    if start < text.len() || sentences.is_empty() {
        sentences.push(&text[start..]);
    }

    debug!("Scanner split {} bytes into {} sentences", text.len(), sentences.len());
    sentences
}
