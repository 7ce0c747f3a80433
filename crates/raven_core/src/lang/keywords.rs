//! Define the reserved keyword vocabulary for the Raven language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording canonical spellings and
//! categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use raven_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::Function), "function");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Bindings / declarations
    Let,
    Const,
    Function,
    Struct,
    Enum,
    Private,
    SelfKw,

    // Control flow / statements
    If,
    Else,
    Switch,
    Case,
    Default,
    Defer,
    Return,
    Throw,
    Try,
    Catch,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Binding,
    Declaration,
    ControlFlow,
    Literal,
    Modifier,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub spelling: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    kw(KeywordId::Let, "let", KeywordCategory::Binding),
    kw(KeywordId::Const, "const", KeywordCategory::Binding),
    kw(KeywordId::Function, "function", KeywordCategory::Declaration),
    kw(KeywordId::Struct, "struct", KeywordCategory::Declaration),
    kw(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    kw(KeywordId::Private, "private", KeywordCategory::Modifier),
    kw(KeywordId::SelfKw, "self", KeywordCategory::Binding),
    kw(KeywordId::If, "if", KeywordCategory::ControlFlow),
    kw(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    kw(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    kw(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    kw(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    kw(KeywordId::Defer, "defer", KeywordCategory::ControlFlow),
    kw(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    kw(KeywordId::Throw, "throw", KeywordCategory::ControlFlow),
    kw(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    kw(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    kw(KeywordId::True, "true", KeywordCategory::Literal),
    kw(KeywordId::False, "false", KeywordCategory::Literal),
];

/// Resolve a spelling to its keyword id, if reserved.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.spelling == spelling).map(|k| k.id)
}

/// Return the canonical spelling for a keyword id.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for a keyword id.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

const fn kw(id: KeywordId, spelling: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, spelling, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_roundtrip() {
        for info in KEYWORDS {
            assert_eq!(from_str(info.spelling), Some(info.id));
            assert_eq!(as_str(info.id), info.spelling);
        }
    }

    #[test]
    fn test_non_keyword_is_none() {
        assert_eq!(from_str("banana"), None);
        assert_eq!(from_str("Function"), None, "lookup is case-sensitive");
    }
}
