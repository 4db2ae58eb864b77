// WHY: pure text -> colored sentence pipeline; no state survives a call, so the same
// Colorizer can be shared across threads and tasks without locking

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod color;
pub mod dfa_splitter;
pub mod normalization;
pub mod ranking;
pub mod splitter;
pub mod word_count;

pub use color::{rainbow, ColorMap, Rgb};
pub use dfa_splitter::DfaSplitter;
pub use normalization::{normalize_text, normalize_text_into, normalize_text_with};
pub use ranking::LengthRankMap;
pub use splitter::split_sentences;
pub use word_count::{count_words, words};

/// Configuration for sentence boundary punctuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryRules {
    /// Characters that terminate a sentence
    pub terminal_punctuation: Vec<char>,
    /// Terminator appended by normalization when the text lacks one
    pub appended_terminal: char,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        Self {
            terminal_punctuation: vec!['.', '?', '!'],
            appended_terminal: '.',
        }
    }
}

impl BoundaryRules {
    pub fn is_terminal(&self, ch: char) -> bool {
        self.terminal_punctuation.contains(&ch)
    }
}

/// A sentence and its word count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Exact slice of the normalized input, terminal punctuation included
    pub value: String,
    /// Word count
    pub length: usize,
}

impl Sentence {
    /// Measure a sentence string
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let length = count_words(&value);
        Self { value, length }
    }
}

/// A sentence with the color assigned to its length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredSentence {
    pub value: String,
    pub length: usize,
    /// `#rrggbb`
    pub color: String,
}

impl ColoredSentence {
    /// Build a colored record from a measured sentence
    pub fn from_sentence(sentence: Sentence, color: Rgb) -> Self {
        Self {
            value: sentence.value,
            length: sentence.length,
            color: color.hex(),
        }
    }
}

/// Which splitter implementation a `Colorizer` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitterKind {
    /// Character scanner
    #[default]
    Scan,
    /// regex-automata meta regex
    Dfa,
}

enum Splitter {
    Scan,
    Dfa(DfaSplitter),
}

/// Sentence colorizer: normalize, split, count, rank, color
pub struct Colorizer {
    rules: BoundaryRules,
    splitter: Splitter,
}

impl Colorizer {
    /// Create colorizer with custom rules and splitter
    pub fn new(rules: BoundaryRules, kind: SplitterKind) -> Result<Self> {
        if rules.terminal_punctuation.is_empty() {
            anyhow::bail!("Boundary rules need at least one terminal punctuation character");
        }
        if !rules.is_terminal(rules.appended_terminal) {
            anyhow::bail!(
                "Appended terminal {:?} is not in the terminal set {:?}",
                rules.appended_terminal,
                rules.terminal_punctuation
            );
        }

        let splitter = match kind {
            SplitterKind::Scan => Splitter::Scan,
            SplitterKind::Dfa => Splitter::Dfa(DfaSplitter::new(&rules)?),
        };

        Ok(Self { rules, splitter })
    }

    /// Create colorizer with default rules and the given splitter
    pub fn with_default_rules(kind: SplitterKind) -> Result<Self> {
        Self::new(BoundaryRules::default(), kind)
    }

    pub fn rules(&self) -> &BoundaryRules {
        &self.rules
    }

    pub fn splitter_kind(&self) -> SplitterKind {
        match self.splitter {
            Splitter::Scan => SplitterKind::Scan,
            Splitter::Dfa(_) => SplitterKind::Dfa,
        }
    }

    /// Normalize and split text into measured sentences
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        let normalized = normalize_text_with(text, &self.rules);
        let parts = match &self.splitter {
            Splitter::Scan => split_sentences(&normalized, &self.rules),
            Splitter::Dfa(dfa) => dfa.split(&normalized),
        };

        parts.into_iter().map(Sentence::new).collect()
    }

    /// Full pipeline. Total over all inputs: empty text yields one empty sentence.
    pub fn colorize(&self, text: &str) -> Vec<ColoredSentence> {
        let sentences = self.sentences(text);
        color_sentences(sentences)
    }
}

/// Attach rank colors to sentences, preserving order
pub fn color_sentences(sentences: Vec<Sentence>) -> Vec<ColoredSentence> {
    let ranks = LengthRankMap::from_sentences(&sentences);
    let colors = ColorMap::from_ranks(&ranks);

    debug!(
        "Coloring {} sentences across {} distinct lengths",
        sentences.len(),
        ranks.distinct_count()
    );

    sentences
        .into_iter()
        .map(|sentence| {
            // Every length in `sentences` was ranked above
            let color = colors.color(sentence.length).unwrap_or_else(|| rainbow(1, 0));
            ColoredSentence::from_sentence(sentence, color)
        })
        .collect()
}

/// Colorize text with the default rules and the scanning splitter
pub fn colorize_text(text: &str) -> Vec<ColoredSentence> {
    let rules = BoundaryRules::default();
    let normalized = normalize_text_with(text, &rules);
    let sentences = split_sentences(&normalized, &rules)
        .into_iter()
        .map(Sentence::new)
        .collect();

    color_sentences(sentences)
}
