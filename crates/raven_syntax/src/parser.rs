//! Parser for the Raven programming language
//!
//! Converts a token stream into a homogeneous AST rooted at a single `Root` node.
//! Grammar violations abort only the declaration being parsed: the failure is
//! reported through the shared `DiagReporter` and the cursor resynchronizes at
//! the next declaration boundary, so one run surfaces every error it can.
//!
//! ## Examples
//!
//! ```rust
//! use raven_core::DiagReporter;
//! use raven_syntax::{ast::NodeKind, lexer, parser};
//!
//! let mut reporter = DiagReporter::new();
//! let tokens = lexer::lex("let x: int = 5;\n", "demo.rv", &mut reporter);
//! let program = parser::parse(&tokens, &mut reporter);
//! assert_eq!(program.children[0].kind, NodeKind::VarDecl);
//! ```

use crate::ast::{Node, NodeKind, Payload};
use crate::lexer::{Token, TokenKind};
use raven_core::lang::keywords::{self, KeywordId};
use raven_core::lang::operators::{self, Associativity, OperatorId};
use raven_core::lang::punctuation::{self, PunctuationId};
use raven_core::{DiagId, DiagMetadata, DiagReporter, LocationId};
use thiserror::Error;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/literal.rs");
include!("parser/types.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
