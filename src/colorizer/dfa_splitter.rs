// WHY: regex-automata backed splitter kept alongside the scanner for performance comparison
// Both must produce the same partition for every input

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::{debug, info};

use super::BoundaryRules;

/// Sentence splitter compiled from the boundary rules into a meta regex
pub struct DfaSplitter {
    /// Compiled `[T]*[^T]+[T]+` pattern where T is the terminal set
    regex: Regex,
}

impl DfaSplitter {
    /// Compile the sentence pattern for the given terminal punctuation
    pub fn new(rules: &BoundaryRules) -> Result<Self> {
        info!("Compiling DFA for sentence splitting");

        let pattern = sentence_pattern(rules);
        let regex = Regex::new(&pattern)?;

        debug!("Successfully compiled DFA with pattern: {}", pattern);
        Ok(Self { regex })
    }

    /// Create splitter for the default `.`, `?`, `!` terminals
    pub fn with_default_rules() -> Result<Self> {
        Self::new(&BoundaryRules::default())
    }

    /// Split text into sentences borrowed from `text`
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut last_end = 0;

        // WHY: each match ends on a greedy terminal run, so the next match (if any)
        // starts exactly where the previous one ended and matches never leave gaps
        for mat in self.regex.find_iter(text) {
            sentences.push(&text[mat.start()..mat.end()]);
            last_end = mat.end();
        }

        if last_end < text.len() || sentences.is_empty() {
            sentences.push(&text[last_end..]);
        }

        debug!("DFA split {} bytes into {} sentences", text.len(), sentences.len());
        sentences
    }
}

/// Build the sentence pattern with every terminal written as a hex escape
/// WHY: hex escapes keep arbitrary punctuation (`]`, `^`, `-`) literal inside classes
fn sentence_pattern(rules: &BoundaryRules) -> String {
    let class: String = rules
        .terminal_punctuation
        .iter()
        .map(|ch| format!("\\x{{{:X}}}", u32::from(*ch)))
        .collect();

    format!("[{class}]*[^{class}]+[{class}]+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorizer::splitter::split_sentences;

    #[test]
    fn test_pattern_escapes_terminals() {
        let pattern = sentence_pattern(&BoundaryRules::default());
        assert_eq!(
            pattern,
            r"[\x{2E}\x{3F}\x{21}]*[^\x{2E}\x{3F}\x{21}]+[\x{2E}\x{3F}\x{21}]+"
        );
    }

    #[test]
    fn test_dfa_simple_split() {
        let splitter = DfaSplitter::with_default_rules().unwrap();
        assert_eq!(
            splitter.split("Hello world. Goodbye now."),
            vec!["Hello world.", " Goodbye now."]
        );
    }

    #[test]
    fn test_dfa_empty_and_unterminated() {
        let splitter = DfaSplitter::with_default_rules().unwrap();
        assert_eq!(splitter.split(""), vec![""]);
        assert_eq!(splitter.split("no terminal"), vec!["no terminal"]);
        assert_eq!(splitter.split("?!"), vec!["?!"]);
    }

    #[test]
    fn test_dfa_matches_scanner() {
        let rules = BoundaryRules::default();
        let splitter = DfaSplitter::new(&rules).unwrap();
        let inputs = [
            "",
            "plain",
            "?! abc",
            "!!Hi. There.",
            "Hi. abc",
            "Wait... What?! Fine.",
            "a.b.c.",
            "One\nline.\n\nTwo\tlines!",
            "Hello 世界! Crab 🦀. Neat?",
            "a. ?b",
        ];

        for input in inputs {
            assert_eq!(
                splitter.split(input),
                split_sentences(input, &rules),
                "splitters disagree on {input:?}"
            );
        }
    }

    #[test]
    fn test_dfa_special_terminals() {
        let rules = BoundaryRules {
            terminal_punctuation: vec![']', '^', '-'],
            appended_terminal: ']',
        };
        let splitter = DfaSplitter::new(&rules).unwrap();
        assert_eq!(splitter.split("a] b^ c-"), vec!["a]", " b^", " c-"]);
        assert_eq!(splitter.split("a] b^ c-"), split_sentences("a] b^ c-", &rules));
    }
}
