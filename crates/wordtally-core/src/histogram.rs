//! Proportional bar rendering for the most frequent words.
//!
//! Each bar's length is the entry's share of the prefix total scaled to
//! [`BAR_SCALE`] and rounded to the nearest integer, ties away from zero.
//! The total is taken over the prefix only, so a single-entry prefix always
//! renders a full-length bar.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::OccurrenceEntry;

/// Default character used to draw bars.
pub const DEFAULT_MARKER: char = '|';

/// Length of the bar for an entry holding the whole prefix total.
pub const BAR_SCALE: f64 = 10.0;

/// A word and its proportional bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Repeated marker characters.
    pub bar: String,
    /// The word this bar represents.
    pub word: String,
}

/// Render bars for `prefix` using [`DEFAULT_MARKER`].
pub fn render_distribution(prefix: &[OccurrenceEntry]) -> AnalysisResult<Vec<Distribution>> {
    render_distribution_with(prefix, DEFAULT_MARKER)
}

/// Render bars for `prefix` using `marker`.
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPrefix`] when the counts in `prefix` sum to
/// zero, and [`AnalysisError::InvalidMarker`] when `marker` is whitespace or
/// a control character.
#[tracing::instrument(skip(prefix), fields(entries = prefix.len()))]
pub fn render_distribution_with(
    prefix: &[OccurrenceEntry],
    marker: char,
) -> AnalysisResult<Vec<Distribution>> {
    validate_marker(marker)?;

    let total: usize = prefix.iter().map(|e| e.count).sum();
    if total == 0 {
        return Err(AnalysisError::EmptyPrefix);
    }

    Ok(prefix
        .iter()
        .map(|e| Distribution {
            bar: marker.to_string().repeat(bar_length(e.count, total)),
            word: e.word.clone(),
        })
        .collect())
}

/// Check that `marker` can draw a visible bar.
pub fn validate_marker(marker: char) -> AnalysisResult<()> {
    if marker.is_whitespace() || marker.is_control() {
        return Err(AnalysisError::InvalidMarker { marker });
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_length(count: usize, total: usize) -> usize {
    let relative = count as f64 / total as f64;
    // f64::round rounds half away from zero
    (relative * BAR_SCALE).round() as usize
}
