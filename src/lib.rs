#![forbid(unsafe_code)]
//! Raven Compiler Front End
//!
//! This crate drives the Raven front end: it reads a source file, runs the
//! lexer and parser from `raven_syntax`, and renders any collected diagnostics
//! through `raven_core`'s reporter.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;

pub use raven_core::{DiagLevel, DiagReporter};
pub use raven_syntax::{ast, lexer, parser};
