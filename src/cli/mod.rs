//! CLI module for cstep
//!
//! This module provides the command-line interface over [`crate::analyze`].
//!
//! ## Commands
//!
//! - `cstep <file>` - Analyze a file and print the JSON envelope
//! - `analyze <file> [--compact] [--no-snapshots]` - Same, with output options
//! - `trace <file> [--stage lexer|parser]` - Print the step traces one event per line
//!
//! `analyze` and `trace` also accept `-c "<code>"` in place of a file.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::AnalyzeConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Traced lexer and parser for a small C subset
#[derive(Parser, Debug)]
#[command(name = "cstep")]
#[command(version = VERSION)]
#[command(about = "Traced lexer and parser for a small C subset", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to analyze (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Print the symbol table (debug)
    #[arg(long = "symbols", value_name = "FILE", conflicts_with = "file")]
    pub symbols_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze source and print the JSON envelope
    Analyze {
        /// Source file to analyze
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Analyze inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
        /// Leave symbol-table snapshots out of lexer steps
        #[arg(long = "no-snapshots")]
        no_snapshots: bool,
    },

    /// Print step traces, one event per line
    Trace {
        /// Source file to trace
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Trace inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
        /// Only print one stage
        #[arg(long, value_enum)]
        stage: Option<Stage>,
    },
}

/// Pipeline stage selectable with `trace --stage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    Lexer,
    Parser,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = AnalyzeConfig::default();

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file, &config);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file, &config);
    }
    if let Some(file) = cli.symbols_file {
        return commands::symbols_file(&file, &config);
    }

    match cli.command {
        Some(Command::Analyze {
            file,
            command,
            compact,
            no_snapshots,
        }) => {
            let config = config.with_pretty_json(!compact).with_symbol_snapshots(!no_snapshots);
            let input = Input::resolve(file, command, "analyze")?;
            let (name, source) = input.load(&config)?;
            commands::analyze_source(&name, &source, &config)
        }
        Some(Command::Trace { file, command, stage }) => {
            let config = config.with_symbol_snapshots(false);
            let input = Input::resolve(file, command, "trace")?;
            let (name, source) = input.load(&config)?;
            commands::trace_source(&name, &source, &config, stage)
        }
        None => {
            // Default: analyze the file if provided
            if let Some(file) = cli.file {
                let source = commands::read_source(&file, config.max_source_size)?;
                commands::analyze_source(&file.to_string_lossy(), &source, &config)
            } else {
                // No command and no file - show help
                Err(CliError::failure("Error: no input file (try `cstep --help`)"))
            }
        }
    }
}

/// Where a subcommand reads its source from.
enum Input {
    File(PathBuf),
    Inline(String),
}

impl Input {
    fn resolve(file: Option<PathBuf>, code: Option<String>, subcommand: &str) -> CliResult<Self> {
        match (file, code) {
            (_, Some(code)) if code.is_empty() => Err(CliError::failure(
                "Error: -c/--command requires source code string",
            )),
            (_, Some(code)) => Ok(Input::Inline(code)),
            (Some(file), None) => Ok(Input::File(file)),
            (None, None) => Err(CliError::failure(format!(
                "Error: {subcommand} requires a file path or -c \"code\""
            ))),
        }
    }

    /// Return a display name and the source text.
    fn load(self, config: &AnalyzeConfig) -> CliResult<(String, String)> {
        match self {
            Input::File(path) => {
                let source = commands::read_source(&path, config.max_source_size)?;
                Ok((path.to_string_lossy().into_owned(), source))
            }
            Input::Inline(code) => Ok(("<command>".to_string(), code)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
