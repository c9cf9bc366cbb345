//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use wordtally_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    minimum_word_length: usize,
    top_words_count: usize,
    histogram_words_count: usize,
    histogram_marker: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    fetch_timeout_secs: u64,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            minimum_word_length: config.minimum_word_length,
            top_words_count: config.top_words_count,
            histogram_words_count: config.histogram_words_count,
            histogram_marker: config.histogram_marker,
            max_input_bytes: config.input_limit(),
            fetch_timeout_secs: config.fetch_timeout(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
            full_info.package.version.if_supports_color(Stream::Stdout, |t| t.green())
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            print_value("License", full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            print_value(
                "Repository",
                full_info.package.repository.if_supports_color(Stream::Stdout, |t| t.cyan()),
            );
        }
        if !full_info.package.homepage.is_empty() {
            print_value(
                "Homepage",
                full_info.package.homepage.if_supports_color(Stream::Stdout, |t| t.cyan()),
            );
        }

        // Configuration section
        println!();
        println!("{}", heading("Configuration"));
        if let Some(ref path) = full_info.config.config_file {
            print_value("Config file", path.if_supports_color(Stream::Stdout, |t| t.cyan()));
        } else {
            print_value(
                "Config file",
                "none loaded".if_supports_color(Stream::Stdout, |t| t.yellow()),
            );
        }
        print_value("Log level", &full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            print_value("Log directory", dir);
        }

        println!();
        println!("{}", heading("Report Defaults"));
        print_value("Minimum word length", full_info.config.minimum_word_length);
        print_value("Top words", full_info.config.top_words_count);
        print_value("Histogram words", full_info.config.histogram_words_count);
        print_value("Histogram marker", full_info.config.histogram_marker);
        match full_info.config.max_input_bytes {
            Some(max) => print_value("Input limit (bytes)", max),
            None => print_value("Input limit (bytes)", "disabled"),
        }
        print_value("Fetch timeout (s)", full_info.config.fetch_timeout_secs);
    }

    Ok(())
}

fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold().underline().to_string())
        .to_string()
}

fn print_value<T: std::fmt::Display>(label: &str, value: T) {
    println!(
        "{}: {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_sources() -> ConfigSources {
        ConfigSources::default()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let config = Config::default();
        let sources = ConfigSources::default();
        let info = ConfigInfo::from_config(&config, &sources);
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.minimum_word_length, 3);
        assert_eq!(info.histogram_marker, '|');
    }

    #[test]
    fn test_config_info_reports_disabled_limit() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
