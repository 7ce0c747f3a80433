//! Syntax frontend for the Raven language: lexer, parser, and the homogeneous AST.
//!
//! This crate turns source text into tokens and tokens into a tree, reporting every
//! problem it finds through a [`raven_core::DiagReporter`] instead of bailing on the
//! first error.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name resolution, type
//!   checking, or evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from the
//!   `raven_core::lang` registries.
//! - Source positions are never stored on tokens or nodes directly; both carry a
//!   [`raven_core::LocationId`] into the reporter's location table.
//!
//! ## Examples
//! ```rust
//! use raven_core::DiagReporter;
//! use raven_syntax::{lexer, parser};
//!
//! let mut reporter = DiagReporter::new();
//! let tokens = lexer::lex("let x = 5;\n", "demo.rv", &mut reporter);
//! let program = parser::parse(&tokens, &mut reporter);
//! assert!(!reporter.has_errors());
//! assert_eq!(program.children.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod lexer;
pub mod parser;
