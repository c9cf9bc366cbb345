//! Word extraction from normalized text.

use crate::normalize::normalize;

/// Words shorter than this many characters are discarded by default.
pub const DEFAULT_MINIMUM_WORD_LENGTH: usize = 3;

/// Normalize `text`, split it on whitespace and keep the words that are at
/// least `min_length` characters long.
///
/// Words are returned in source order and are not deduplicated. Length is
/// measured in characters, so `"été"` has length 3. Digits and mixed
/// alphanumerics count as words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn tokenize(text: &str, min_length: usize) -> Vec<String> {
    let words: Vec<String> = normalize(text)
        .split_whitespace()
        .filter(|w| w.chars().count() >= min_length)
        .map(str::to_string)
        .collect();
    tracing::debug!(words = words.len(), "tokenized document");
    words
}
