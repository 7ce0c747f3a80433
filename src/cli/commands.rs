//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use raven_core::DiagReporter;
use raven_syntax::{ast, lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during parsing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with a size limit.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render collected diagnostics to stderr and turn them into an exit code.
fn finish(reporter: &DiagReporter, source: &str, color: bool) -> CliResult<ExitCode> {
    if !reporter.is_empty() {
        eprint!("{}", reporter.render_all(Some(source), color));
    }
    if reporter.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Lex and parse a file, reporting diagnostics. This is the default action.
pub fn check_file(file_path: &str, color: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut reporter = DiagReporter::new();

    let tokens = lexer::lex(&source, file_path, &mut reporter);
    parser::parse(&tokens, &mut reporter);
    tracing::debug!(
        diagnostics = reporter.len(),
        errors = reporter.has_errors(),
        "front end finished"
    );

    if !reporter.has_errors() {
        println!("✓ Parse check passed!");
    }
    finish(&reporter, &source, color)
}

/// Tokenize only and dump the token stream.
pub fn lex_file(file_path: &str, color: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut reporter = DiagReporter::new();

    let tokens = lexer::lex(&source, file_path, &mut reporter);
    for token in &tokens {
        let location = reporter.locations().get(token.location);
        println!("{}:{}\t{:?}", location.line, location.column, token.kind);
    }
    finish(&reporter, &source, color)
}

/// Parse and display the tree.
pub fn parse_file(file_path: &str, color: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut reporter = DiagReporter::new();

    let tokens = lexer::lex(&source, file_path, &mut reporter);
    let root = parser::parse(&tokens, &mut reporter);

    print!("{}", ast::display_tree(&root, 0));
    finish(&reporter, &source, color)
}
