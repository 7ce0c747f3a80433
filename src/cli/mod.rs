//! CLI module for the Raven compiler front end
//!
//! This module provides the command-line interface for the front end.
//!
//! ## Usage
//!
//! - `raven <file>` - Lex and parse a file, reporting diagnostics
//! - `raven --lex <file>` - Tokenize only and dump the token stream (debug)
//! - `raven --parse <file>` - Parse and dump the tree (debug)
//! - `--no-color` - Disable ANSI colors in rendered diagnostics
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

use clap::Parser;

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
    /// Create a new CLI error with a message and exit code.
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

/// The Raven compiler front end
#[derive(Parser, Debug)]
#[command(name = "raven")]
#[command(version = VERSION)]
#[command(about = "The Raven compiler front end", long_about = None)]
pub struct Cli {
    /// File to check (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only and dump the token stream (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and dump the tree (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Disable ANSI colors in rendered diagnostics
    #[arg(long = "no-color")]
    pub no_color: bool,
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
    let color = !cli.no_color;

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), color);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), color);
    }

    if let Some(file) = cli.file {
        commands::check_file(&file.to_string_lossy(), color)
    } else {
        // No file given - clap's help text is the useful response
        Err(CliError::failure(
            "Usage: raven <FILE> (see --help for debug flags)",
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["raven", "test.rv"]).unwrap();
        assert!(cli.file.is_some());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["raven", "--lex", "test.rv"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["raven", "--parse", "test.rv"]).unwrap();
        assert!(cli.parse_file.is_some());
    }

    #[test]
    fn test_cli_parse_no_color() {
        let cli = Cli::try_parse_from(["raven", "--no-color", "test.rv"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn test_debug_flags_conflict_with_file() {
        assert!(Cli::try_parse_from(["raven", "test.rv", "--lex", "other.rv"]).is_err());
    }
}
