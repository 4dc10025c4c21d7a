//! Logging infrastructure for the generation pipeline
//!
//! Structured logging is provided by the `tracing` crate. Library code only
//! emits spans and events; installing a subscriber is left to the binary (or
//! to tests) through [`init_logging`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use umlstub::core::logging::init_logging;
//!
//! // Defaults: info level, compact format
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: single line per event
//! - `pretty`: multi-line with source locations, for development
//! - `json`: one JSON object per event, for log aggregation
//!
//! # Environment Variables
//!
//! - `UMLSTUB_LOG_LEVEL`: log level or full filter directive
//! - `UMLSTUB_LOG_FORMAT`: `compact`, `pretty` or `json`
//! - `RUST_LOG`: standard `tracing-subscriber` filter, used when the above
//!   are unset
//!
//! # Filtering Logs
//!
//! ```bash
//! # Only the grammar matcher at trace level
//! RUST_LOG="umlstub::plugins::uml::grammar=trace" umlstub generate -i model.uml
//!
//! # Everything at info, the resolver at debug
//! RUST_LOG="info,umlstub::plugins::uml::relations=debug" umlstub generate -i model.uml
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Initialize the global tracing subscriber
///
/// * `level` - log level or filter directive. Falls back to
///   `UMLSTUB_LOG_LEVEL`, then `RUST_LOG`, then `info`. `off` disables output.
/// * `format` - `compact`, `pretty` or `json`. Falls back to
///   `UMLSTUB_LOG_FORMAT`, then `compact`.
///
/// Events go to stderr so that generated code on stdout stays clean.
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("UMLSTUB_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("UMLSTUB_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_span_events(FmtSpan::NONE)
                        .compact(),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
