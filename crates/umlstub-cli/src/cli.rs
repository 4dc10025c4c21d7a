//! Command-line interface for the umlstub utility
//!
//! Provides a CLI to turn class notation into Java declaration stubs.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::colorizer::colorize_output;
use umlstub::core::logging::init_logging;
use umlstub::plugins::{Orchestrator, UmlDetector};
use umlstub::{Database, Detector, RenderConfig, UmlError};

/// Umlstub - Generate Java stubs from class notation
#[derive(Parser)]
#[command(name = "umlstub")]
#[command(about = "Turn a plain-text UML class notation into Java declaration stubs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (off|trace|debug|info|warn|error)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Java declarations from class notation
    Generate {
        /// Input file containing class notation (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the declarations (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces of indentation for members
        #[arg(long, default_value_t = 4)]
        indent: usize,

        /// Print the parsed model as JSON instead of Java
        #[arg(long)]
        json: bool,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,

        /// Skip notation detection
        #[arg(long)]
        skip_detection: bool,
    },

    /// Detect whether input is class notation
    Detect {
        /// Input file to analyze (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that input declares at least one class or enum
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Result of the detect command, as printed with `--json`
#[derive(Debug, Serialize)]
struct DetectionReport {
    diagram_type: String,
    confidence: f64,
}

/// Main CLI application
pub struct UmlstubApp {
    orchestrator: Orchestrator,
}

impl UmlstubApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            orchestrator: Orchestrator::with_uml_plugins_and_config(config),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Flags win over UMLSTUB_LOG_LEVEL / UMLSTUB_LOG_FORMAT
        if let Err(e) = init_logging(
            cli.log_level.map(|level| level.as_str()),
            cli.log_format.map(|format| format.as_str()),
        ) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("umlstub v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                output,
                indent,
                json,
                color,
                skip_detection,
            } => self.generate_command(
                input,
                output,
                indent,
                json,
                color,
                skip_detection,
                cli.verbose,
            ),
            Commands::Detect { input, json } => self.detect_command(input, json, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Handle the generate command
    #[allow(clippy::too_many_arguments)]
    fn generate_command(
        &mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        indent: usize,
        json: bool,
        color: ColorChoice,
        skip_detection: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let config = RenderConfig::new(indent);
        config.validate()?;
        self.orchestrator = Orchestrator::with_uml_plugins_and_config(config);

        if !skip_detection {
            self.orchestrator.detect_diagram_type(&content)?;
        }

        let rendered = if json {
            let database = self.orchestrator.parse_uml(&content)?;
            serde_json::to_string_pretty(&database)?
        } else {
            let declarations = self.orchestrator.process_uml(&content)?;
            info!(declarations = declarations.len(), %config, "Generated declarations");
            let joined = declarations.join("\n\n");
            if self.should_colorize(&output, color) {
                colorize_output(&joined)
            } else {
                joined
            }
        };

        if verbose {
            eprintln!("Successfully generated declarations");
        }

        self.write_output(output, &rendered)
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, output: &Option<PathBuf>, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                match output {
                    None => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Some(p) if p.to_str() == Some("-") => {
                        crossterm::tty::IsTty::is_tty(&std::io::stdout())
                    }
                    Some(_) => false,
                }
            }
        }
    }

    /// Handle the detect command
    fn detect_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let diagram_type = match self.orchestrator.detect_diagram_type(&content) {
            Ok(diagram_type) => diagram_type,
            Err(e) => {
                eprintln!("Could not detect notation: {}", e);
                return Err(e);
            }
        };

        let report = DetectionReport {
            diagram_type,
            confidence: UmlDetector::new().confidence(&content),
        };
        debug!(?report, "Detection finished");

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{} (confidence {:.2})", report.diagram_type, report.confidence);
        }
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let database = self.orchestrator.parse_uml(&content)?;
        if database.is_empty() {
            println!("✗ {}", UmlError::EmptyModel);
            return Err(UmlError::EmptyModel.into());
        }

        println!(
            "✓ Valid: {} class(es), {} enum(s)",
            database.class_count(),
            database.enum_count()
        );
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file '{}'", path.display())),
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(UmlError::from)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Get a reference to the orchestrator (for testing)
    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}

impl Default for UmlstubApp {
    fn default() -> Self {
        Self::new()
    }
}
