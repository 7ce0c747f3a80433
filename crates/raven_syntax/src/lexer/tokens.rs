//! Token types for the Raven lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Every token carries a `LocationId` into the reporter's location table rather
//!   than a raw line/column pair.

use raven_core::LocationId;
use raven_core::lang::keywords::{self, KeywordId};
use raven_core::lang::operators::OperatorId;
use raven_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - Keyword/operator/punctuation tokens carry stable IDs from `raven_core::lang`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),
    Float(f64),
    String(String),
    Tag(String), // #name

    // ========== Special ==========
    Eof, // end of file
}

/// A token with its kind, original spelling, and interned location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: LocationId,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, location: LocationId) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// True if this token is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self.kind, TokenKind::Keyword(k) if k == id)
    }

    /// True if this token is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self.kind, TokenKind::Operator(o) if o == id)
    }

    /// True if this token is the given punctuation mark.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self.kind, TokenKind::Punctuation(p) if p == id)
    }

    /// True if this token marks the end of input.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
