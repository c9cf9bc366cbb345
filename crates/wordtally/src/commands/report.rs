//! Report command: unique word count, top words and histogram.

use std::time::Duration;

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use wordtally_core::config::Config;
use wordtally_core::frequency::OccurrenceEntry;
use wordtally_core::histogram::Distribution;
use wordtally_core::report::{self, ReportSettings, Section, WordReport};

use crate::source::{LoadOptions, Source, load_document};

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Document to analyze: an http(s) URL, a file path, or `-` for stdin.
    pub source: String,

    /// Ignore words shorter than this many characters.
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Rows in the top-words table.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Rows in the histogram.
    #[arg(long, value_name = "N")]
    pub histogram: Option<usize>,

    /// Character used to draw histogram bars.
    #[arg(long, value_name = "CHAR")]
    pub marker: Option<char>,

    /// Sections to print (comma-separated). Omit for all.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub sections: Option<Vec<Section>>,
}

impl ReportArgs {
    /// Merge command-line overrides onto the configured settings.
    fn settings(&self, config: &Config) -> ReportSettings {
        let base = ReportSettings::from(config);
        ReportSettings {
            minimum_word_length: self.min_length.unwrap_or(base.minimum_word_length),
            top_words_count: self.top.unwrap_or(base.top_words_count),
            histogram_words_count: self.histogram.unwrap_or(base.histogram_words_count),
            histogram_marker: self.marker.unwrap_or(base.histogram_marker),
        }
    }

    fn wants(&self, section: Section) -> bool {
        self.sections
            .as_ref()
            .is_none_or(|selected| selected.contains(&section))
    }
}

/// Fetch a document and print its word-frequency reports.
#[instrument(name = "cmd_report", skip_all, fields(source = %args.source))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let settings = args.settings(config);
    debug!(?settings, sections = ?args.sections, "executing report command");

    if args.sections.as_ref().is_some_and(Vec::is_empty) {
        bail!("--sections needs at least one of: count, top, histogram");
    }

    let source = Source::parse(&args.source);
    let options = LoadOptions {
        max_bytes: config.input_limit(),
        timeout: Duration::from_secs(config.fetch_timeout()),
        progress: !quiet && !global_json,
    };
    let text = load_document(&source, &options)?;

    let report = report::analyze(&text, &settings)
        .with_context(|| format!("failed to analyze {source}"))?;

    if global_json {
        let output = JsonReport::select(&args, &report);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_report(&args, &report);
    Ok(())
}

/// JSON view of a [`WordReport`] holding only the selected sections.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    minimum_word_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_words: Option<&'a [OccurrenceEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    histogram: Option<&'a [Distribution]>,
}

impl<'a> JsonReport<'a> {
    fn select(args: &ReportArgs, report: &'a WordReport) -> Self {
        let count = args.wants(Section::Count);
        Self {
            minimum_word_length: report.minimum_word_length,
            unique_words: count.then_some(report.unique_words),
            total_words: count.then_some(report.total_words),
            top_words: args
                .wants(Section::Top)
                .then_some(report.top_words.as_slice()),
            histogram: args
                .wants(Section::Histogram)
                .then_some(report.histogram.as_slice()),
        }
    }
}

fn print_report(args: &ReportArgs, report: &WordReport) {
    let mut first = true;
    let mut separate = || {
        if !std::mem::take(&mut first) {
            println!();
        }
    };

    if args.wants(Section::Count) {
        separate();
        println!("{}", report::count_summary(report));
    }

    if args.wants(Section::Top) {
        separate();
        let heading = format!("Top {} words", report.top_words.len());
        println!("{}", heading.if_supports_color(Stream::Stdout, |t| t.bold()));
        for line in report::top_words_lines(&report.top_words) {
            println!("{line}");
        }
    }

    if args.wants(Section::Histogram) {
        separate();
        let heading = format!("Histogram of the top {} words", report.histogram.len());
        println!("{}", heading.if_supports_color(Stream::Stdout, |t| t.bold()));
        if report.histogram.is_empty() {
            println!(
                "{}",
                "(no words to chart)".if_supports_color(Stream::Stdout, |t| t.dimmed())
            );
        }
        for line in report::histogram_lines(&report.histogram) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ReportArgs {
        ReportArgs {
            source: "doc.txt".to_string(),
            ..ReportArgs::default()
        }
    }

    #[test]
    fn config_values_used_without_flags() {
        let config = Config {
            top_words_count: 9,
            ..Config::default()
        };
        let settings = args().settings(&config);
        assert_eq!(settings.top_words_count, 9);
        assert_eq!(settings.minimum_word_length, 3);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            top_words_count: 9,
            histogram_marker: '*',
            ..Config::default()
        };
        let settings = ReportArgs {
            top: Some(2),
            marker: Some('#'),
            min_length: Some(1),
            ..args()
        }
        .settings(&config);
        assert_eq!(settings.top_words_count, 2);
        assert_eq!(settings.histogram_marker, '#');
        assert_eq!(settings.minimum_word_length, 1);
        assert_eq!(settings.histogram_words_count, 5);
    }

    #[test]
    fn all_sections_by_default() {
        let a = args();
        assert!(Section::ALL.iter().all(|s| a.wants(*s)));
    }

    #[test]
    fn section_selection() {
        let a = ReportArgs {
            sections: Some(vec![Section::Histogram]),
            ..args()
        };
        assert!(a.wants(Section::Histogram));
        assert!(!a.wants(Section::Count));
        assert!(!a.wants(Section::Top));
    }

    #[test]
    fn json_keeps_only_selected_sections() {
        let report = report::analyze("the whale, the sea", &ReportSettings::default()).unwrap();
        let a = ReportArgs {
            sections: Some(vec![Section::Top]),
            ..args()
        };
        let json = serde_json::to_value(JsonReport::select(&a, &report)).unwrap();
        assert_eq!(json["minimum_word_length"], 3);
        assert_eq!(json["top_words"][0]["word"], "the");
        assert!(json.get("unique_words").is_none());
        assert!(json.get("histogram").is_none());

        let json = serde_json::to_value(JsonReport::select(&args(), &report)).unwrap();
        assert_eq!(json["unique_words"], 3);
        assert_eq!(json["histogram"][0]["bar"], "|||||");
    }

    #[test]
    fn missing_file_fails() {
        let a = ReportArgs {
            source: "/nonexistent/wordtally/doc.txt".to_string(),
            ..args()
        };
        assert!(cmd_report(a, false, true, &Config::default()).is_err());
    }
}
