//! Text normalization: Unicode lowercasing and punctuation stripping.

use regex::Regex;
use std::sync::LazyLock;

/// Every character in Unicode general category P (connector, dash, open,
/// close, initial quote, final quote, other).
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("valid regex"));

/// Lowercase `text` and remove all Unicode punctuation.
///
/// Letters, digits, whitespace and non-punctuation symbols (`$`, `+`, `©`)
/// are kept. Never fails; empty input yields empty output.
///
/// ```
/// use wordtally_core::normalize::normalize;
///
/// assert_eq!(normalize("I wouldn't take [those] odds!"), "i wouldnt take those odds");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    PUNCTUATION.replace_all(&lowered, "").into_owned()
}
