//! Report composition: runs the pipeline and shapes its output.
//!
//! [`analyze`] turns document text into a [`WordReport`], plain data that a
//! presentation layer can print or serialize. The `*_lines` helpers produce
//! the aligned text rows the CLI prints.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AnalysisResult;
use crate::frequency::{self, OccurrenceEntry, Ranking};
use crate::histogram::{self, DEFAULT_MARKER, Distribution};
use crate::tokenize::{self, DEFAULT_MINIMUM_WORD_LENGTH};

/// Default number of rows in the top-words table.
pub const DEFAULT_TOP_WORDS_COUNT: usize = 20;

/// Default number of rows in the histogram.
pub const DEFAULT_HISTOGRAM_WORDS_COUNT: usize = 5;

/// A report section that can be selected for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Section {
    /// Number of unique words.
    Count,
    /// Ranked table of the most frequent words.
    Top,
    /// Bar histogram of the most frequent words.
    Histogram,
}

impl Section {
    /// Every section, in print order.
    pub const ALL: [Self; 3] = [Self::Count, Self::Top, Self::Histogram];

    /// Returns the section name as used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Top => "top",
            Self::Histogram => "histogram",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Words shorter than this are discarded.
    pub minimum_word_length: usize,
    /// Rows in the top-words table.
    pub top_words_count: usize,
    /// Rows in the histogram.
    pub histogram_words_count: usize,
    /// Character used to draw histogram bars.
    pub histogram_marker: char,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            minimum_word_length: DEFAULT_MINIMUM_WORD_LENGTH,
            top_words_count: DEFAULT_TOP_WORDS_COUNT,
            histogram_words_count: DEFAULT_HISTOGRAM_WORDS_COUNT,
            histogram_marker: DEFAULT_MARKER,
        }
    }
}

impl From<&Config> for ReportSettings {
    fn from(config: &Config) -> Self {
        Self {
            minimum_word_length: config.minimum_word_length,
            top_words_count: config.top_words_count,
            histogram_words_count: config.histogram_words_count,
            histogram_marker: config.histogram_marker,
        }
    }
}

/// Result of analyzing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    /// Minimum word length used when tokenizing.
    pub minimum_word_length: usize,
    /// Number of distinct words.
    pub unique_words: usize,
    /// Number of words counted, including repeats.
    pub total_words: usize,
    /// The most frequent words, in rank order.
    pub top_words: Vec<OccurrenceEntry>,
    /// Bars for the most frequent words. Empty when no words were counted.
    pub histogram: Vec<Distribution>,
    /// Every distinct word with its count, in rank order.
    #[serde(skip)]
    pub ranking: Ranking,
}

/// Tokenize, aggregate and render `text` according to `settings`.
///
/// The histogram is skipped when its prefix would be empty, so an empty
/// document produces an empty report rather than an error.
///
/// # Errors
///
/// Returns an error if the histogram marker is invalid.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, settings: &ReportSettings) -> AnalysisResult<WordReport> {
    histogram::validate_marker(settings.histogram_marker)?;

    let words = tokenize::tokenize(text, settings.minimum_word_length);
    let ranking = frequency::aggregate(&words);

    let histogram_prefix = ranking.prefix(settings.histogram_words_count);
    let histogram = if histogram_prefix.is_empty() {
        tracing::debug!("no words to chart, skipping histogram");
        Vec::new()
    } else {
        histogram::render_distribution_with(histogram_prefix, settings.histogram_marker)?
    };

    let report = WordReport {
        minimum_word_length: settings.minimum_word_length,
        unique_words: ranking.len(),
        total_words: ranking.total_words(),
        top_words: ranking.prefix(settings.top_words_count).to_vec(),
        histogram,
        ranking,
    };
    tracing::info!(
        unique_words = report.unique_words,
        total_words = report.total_words,
        "document analyzed"
    );
    Ok(report)
}

/// Right-align `word` in a field `width` characters wide.
///
/// Words already at least `width` characters long are returned unchanged.
pub fn pad(word: &str, width: usize) -> String {
    format!("{word:>width$}")
}

/// One-line summary of the unique word count.
pub fn count_summary(report: &WordReport) -> String {
    format!(
        "Found {} unique words with at least {} characters",
        report.unique_words, report.minimum_word_length
    )
}

/// Rows of `word count`, words padded to the longest word in `entries`.
pub fn top_words_lines(entries: &[OccurrenceEntry]) -> Vec<String> {
    let width = max_word_width(entries.iter().map(|e| e.word.as_str()));
    entries
        .iter()
        .map(|e| format!("{} {}", pad(&e.word, width), e.count))
        .collect()
}

/// Rows of `word bar`, words padded to the longest word in `distributions`.
pub fn histogram_lines(distributions: &[Distribution]) -> Vec<String> {
    let width = max_word_width(distributions.iter().map(|d| d.word.as_str()));
    distributions
        .iter()
        .map(|d| format!("{} {}", pad(&d.word, width), d.bar))
        .collect()
}

fn max_word_width<'a>(words: impl Iterator<Item = &'a str>) -> usize {
    words.map(|w| w.chars().count()).max().unwrap_or(0)
}
