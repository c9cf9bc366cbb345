//! Error types for wordtally-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during word-frequency analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// A histogram was requested for entries whose counts sum to zero.
    #[error("cannot render a histogram for an empty prefix (total count is zero)")]
    EmptyPrefix,

    /// The histogram marker is not a printable character.
    #[error("invalid histogram marker {marker:?}: must be a visible, non-whitespace character")]
    InvalidMarker {
        /// The rejected marker character.
        marker: char,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
