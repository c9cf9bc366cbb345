//! Core library for wordtally.
//!
//! This crate provides the word-frequency pipeline used by the `wordtally`
//! CLI and any downstream consumers:
//!
//! text → [`normalize`] → [`tokenize`] → [`frequency`] → [`histogram`]
//!
//! with [`report`] driving the stages and shaping their output.
//!
//! # Modules
//!
//! - [`normalize`] - Lowercasing and punctuation stripping
//! - [`tokenize`] - Whitespace splitting and short-word filtering
//! - [`frequency`] - Counting and deterministic ranking
//! - [`histogram`] - Proportional bar rendering
//! - [`report`] - Pipeline entry point and text layout helpers
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordtally_core::{ReportSettings, analyze};
//!
//! let report = analyze("the cat and the hat", &ReportSettings::default()).unwrap();
//! assert_eq!(report.unique_words, 4);
//! assert_eq!(report.top_words[0].word, "the");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod histogram;
pub mod normalize;
pub mod report;
pub mod tokenize;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::{OccurrenceEntry, Ranking, aggregate};
pub use histogram::{Distribution, render_distribution};
pub use report::{ReportSettings, Section, WordReport, analyze, pad};
pub use tokenize::tokenize;
