//! Word frequency aggregation and ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A distinct word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceEntry {
    /// Number of occurrences (always positive inside a [`Ranking`]).
    pub count: usize,
    /// The normalized word.
    pub word: String,
}

impl OccurrenceEntry {
    /// Create an entry from a count and a word.
    pub fn new(count: usize, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

/// Distinct words with their counts, most frequent first.
///
/// Entries are unique by word. Ties on count are ordered by word in
/// descending byte order, so `(2, "z")` precedes `(2, "a")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking(Vec<OccurrenceEntry>);

impl Ranking {
    /// All entries in rank order.
    pub fn entries(&self) -> &[OccurrenceEntry] {
        &self.0
    }

    /// The first `n` entries, or all of them if there are fewer than `n`.
    pub fn prefix(&self, n: usize) -> &[OccurrenceEntry] {
        &self.0[..n.min(self.0.len())]
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, equal to the length of the aggregated sequence.
    pub fn total_words(&self) -> usize {
        self.0.iter().map(|e| e.count).sum()
    }
}

/// Count each distinct word and rank the results.
///
/// Entries are sorted ascending by `(count, word)` and the whole sequence is
/// then reversed: highest count first, ties broken by word descending.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn aggregate<S: AsRef<str>>(words: &[S]) -> Ranking {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in words {
        *counts.entry(w.as_ref()).or_insert(0) += 1;
    }

    let mut entries: Vec<OccurrenceEntry> = counts
        .into_iter()
        .map(|(word, count)| OccurrenceEntry::new(count, word))
        .collect();

    entries.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.word.cmp(&b.word)));
    entries.reverse();

    tracing::debug!(unique = entries.len(), "aggregated word counts");
    Ranking(entries)
}
