// WHY: normalization runs before splitting so every non-empty input ends on a terminator
// and the splitter never has to special-case a dangling final clause

use super::BoundaryRules;

/// Trim surrounding whitespace and append the default terminator when the text
/// does not already end with terminal punctuation. Empty input stays empty.
pub fn normalize_text(text: &str) -> String {
    normalize_text_with(text, &BoundaryRules::default())
}

/// Rule-aware variant used by `Colorizer`
pub fn normalize_text_with(text: &str, rules: &BoundaryRules) -> String {
    let mut buffer = String::with_capacity(text.len() + 1);
    normalize_text_into(text, rules, &mut buffer);
    buffer
}

/// Normalize into a caller-supplied buffer
/// WHY: lets batch callers reuse one allocation across inputs
pub fn normalize_text_into(text: &str, rules: &BoundaryRules, buffer: &mut String) {
    buffer.clear();

    let trimmed = text.trim();
    buffer.push_str(trimmed);

    match trimmed.chars().last() {
        Some(last) if !rules.is_terminal(last) => buffer.push(rules.appended_terminal),
        _ => {}
    }
}
