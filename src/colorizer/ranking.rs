use std::collections::{BTreeMap, BTreeSet};

use super::Sentence;

/// Distinct sentence length -> 0-based rank in ascending numeric order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LengthRankMap {
    ranks: BTreeMap<usize, usize>,
}

impl LengthRankMap {
    /// Rank the distinct lengths of the given sentences
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        Self::from_lengths(sentences.iter().map(|sentence| sentence.length))
    }

    /// Rank a multiset of lengths. Input order does not matter.
    pub fn from_lengths<I>(lengths: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        // WHY: BTreeSet orders integers numerically, so 10 ranks after 9
        let distinct: BTreeSet<usize> = lengths.into_iter().collect();
        let ranks = distinct
            .into_iter()
            .enumerate()
            .map(|(rank, length)| (length, rank))
            .collect();

        Self { ranks }
    }

    /// Rank of a length, if it occurs
    pub fn rank(&self, length: usize) -> Option<usize> {
        self.ranks.get(&length).copied()
    }

    /// Number of distinct lengths (`k`)
    pub fn distinct_count(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `(length, rank)` pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ranks.iter().map(|(&length, &rank)| (length, rank))
    }
}
