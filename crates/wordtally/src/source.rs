//! Document retrieval: URLs, local files and standard input.
//!
//! Every source is read as bytes through the same size limit, then decoded
//! as UTF-8 (invalid sequences become U+FFFD). A failed fetch never produces
//! partial text.

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, bail};
use camino::Utf8Path;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, instrument, warn};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// An `http://` or `https://` URL.
    Url(&'a str),
    /// Standard input, spelled `-`.
    Stdin,
    /// A local file.
    File(&'a Utf8Path),
}

impl<'a> Source<'a> {
    /// Classify a command-line source argument.
    pub fn parse(arg: &'a str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else if is_url(arg) {
            Self::Url(arg)
        } else {
            Self::File(Utf8Path::new(arg))
        }
    }
}

impl std::fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

fn is_url(arg: &str) -> bool {
    let lower = arg.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Options for loading a document.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Reject documents larger than this many bytes.
    pub max_bytes: Option<usize>,
    /// Give up on a remote fetch after this long.
    pub timeout: Duration,
    /// Show a spinner while fetching.
    pub progress: bool,
}

/// Load the full text of `source`.
#[instrument(skip_all, fields(source = %source))]
pub fn load_document(source: &Source<'_>, options: &LoadOptions) -> anyhow::Result<String> {
    let text = match source {
        Source::Url(url) => fetch_url(url, options)?,
        Source::Stdin => read_stdin(options.max_bytes)?,
        Source::File(path) => read_input_file(path, options.max_bytes)?,
    };
    info!(bytes = text.len(), "document loaded");
    Ok(text)
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let file = std::fs::File::open(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    read_bounded(file, path.as_str(), max_bytes)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_bounded(std::io::stdin().lock(), "<stdin>", max_bytes)
}

/// Read at most `max_bytes + 1` bytes from `reader`, reject anything over
/// the limit, then decode the bytes as text.
fn read_bounded(
    mut reader: impl Read,
    what: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {what}"))?;
            check_size(what, bytes.len(), max)?;
        }
        None => {
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {what}"))?;
        }
    }
    Ok(decode(what, bytes))
}

fn decode(what: &str, bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        warn!(source = what, "input is not valid UTF-8, replacing invalid sequences");
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    })
}

fn fetch_url(url: &str, options: &LoadOptions) -> anyhow::Result<String> {
    let spinner = options.progress.then(|| fetch_spinner(url));
    let result = fetch_body(url, options);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result
}

fn fetch_body(url: &str, options: &LoadOptions) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    debug!(url, timeout = ?options.timeout, "fetching document");
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to fetch {url}"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("failed to fetch {url}: server returned {status}");
    }

    if let (Some(max), Some(len)) = (options.max_bytes, response.content_length()) {
        check_size(url, usize::try_from(len).unwrap_or(usize::MAX), max)?;
    }

    read_bounded(response, url, options.max_bytes)
}

fn check_size(what: &str, size: usize, max: usize) -> anyhow::Result<()> {
    if size > max {
        bail!("input too large: {what} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {url}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
