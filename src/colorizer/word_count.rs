// WHY: word counting is case- and punctuation-insensitive so "Hi, there!" and
// "hi there" measure the same

/// Word characters are ASCII letters and digits; underscore is stripped along
/// with all other punctuation and symbols.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Lower-cased tokens of a sentence after punctuation is removed
pub fn words(sentence: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(sentence.len());
    let mut prev_was_space = false;

    for ch in sentence.chars() {
        if ch.is_whitespace() {
            // Collapse any whitespace run into a single space
            if !prev_was_space {
                cleaned.push(' ');
                prev_was_space = true;
            }
        } else if is_word_char(ch) {
            cleaned.push(ch.to_ascii_lowercase());
            prev_was_space = false;
        }
        // WHY: stripped characters do not break a whitespace run, so "a - b"
        // collapses to "a b" rather than "a  b"
    }

    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Number of words in a sentence
pub fn count_words(sentence: &str) -> usize {
    // WHY: counting tokens directly avoids allocating the word list on the hot path
    let mut count = 0;
    let mut in_word = false;

    for ch in sentence.chars() {
        if ch.is_whitespace() {
            in_word = false;
        } else if is_word_char(ch) && !in_word {
            count += 1;
            in_word = true;
        }
    }

    count
}
