//! # devis-cli
//!
//! Command-line composer around `devis-core`: reads a quote request, applies
//! the configuration, and prints the document data for the Word template
//! renderer (or a French recap).
//!
//! ## Module Organization
//! ```text
//! devis_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, run)
//! ├── config.rs       ◄─── devis.toml + DEVIS_* overrides
//! ├── document.rs     ◄─── build_quote, placeholder map
//! ├── summary.rs      ◄─── --summary text
//! └── error.rs        ◄─── AppError printed on failure
//! ```
//!
//! ## Usage
//! ```bash
//! # JSON document on stdout
//! devis --input request.json
//!
//! # Request from stdin, French recap, custom config
//! cat request.json | devis --summary --config ./devis.toml
//!
//! # More logging
//! RUST_LOG=devis=trace devis -i request.json
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod summary;

use chrono::Local;
use devis_core::QuoteForm;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::DevisConfig;
use document::build_quote;
use error::AppError;
use summary::render_summary;

const USAGE: &str = "\
Usage: devis [OPTIONS]

Options:
  -i, --input <PATH>    Quote request JSON file, or - for stdin (default: -)
  -c, --config <PATH>   Config file (default: platform config dir/devis.toml)
  -s, --summary         Print a French recap instead of JSON
  -h, --help            Show this help";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub summary: bool,
    pub help: bool,
}

/// Parses arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let value = args
                    .next()
                    .ok_or_else(|| AppError::usage("--input needs a path (or -)"))?;
                parsed.input = (value != "-").then(|| PathBuf::from(value));
            }
            "--config" | "-c" => {
                let value = args
                    .next()
                    .ok_or_else(|| AppError::usage("--config needs a path"))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--summary" | "-s" => parsed.summary = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(AppError::usage(format!(
                    "Unknown argument '{}'\n\n{}",
                    other, USAGE
                )))
            }
        }
    }

    Ok(parsed)
}

/// Runs the CLI with the process arguments.
///
/// ## Steps
/// 1. Initialize logging (stderr)
/// 2. Parse arguments
/// 3. Load configuration
/// 4. Read and parse the request
/// 5. Build the quote and print it
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = DevisConfig::load(args.config.clone())?;
    debug!(currency = %config.company.currency, rate = %config.tax.rate, "Config loaded");

    let request = read_request(args.input.as_ref())?;
    let form: QuoteForm = serde_json::from_str(&request)?;

    let today = Local::now().date_naive();
    let document = build_quote(&form, &config, today)?;

    if args.summary {
        println!("{}", render_summary(&document));
    } else {
        println!("{}", serde_json::to_string_pretty(&document)?);
    }

    info!(files = ?document.output_files, "Done");
    Ok(())
}

fn read_request(input: Option<&PathBuf>) -> Result<String, AppError> {
    match input {
        Some(path) => {
            info!(?path, "Reading quote request");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            debug!("Reading quote request from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=devis=trace` - Show trace for devis crates only
/// - Default: `info,devis=debug`
///
/// Logs go to stderr so stdout carries only the document.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,devis=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults_to_stdin_json() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed, CliArgs::default());
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = parse_args(args(&["-i", "req.json", "--config", "devis.toml", "-s"])).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("req.json")));
        assert_eq!(parsed.config, Some(PathBuf::from("devis.toml")));
        assert!(parsed.summary);
        assert!(!parsed.help);
    }

    #[test]
    fn test_dash_means_stdin() {
        let parsed = parse_args(args(&["--input", "-"])).unwrap();
        assert_eq!(parsed.input, None);
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_args(args(&["--input"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);

        let err = parse_args(args(&["--pdf"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);
        assert!(err.message.contains("--pdf"));
    }
}
