//! Punctuation vocabulary.
//!
//! Structural tokens that are neither keywords nor operators: delimiters, separators, and the
//! decorator/variadic markers.
//!
//! ## Examples
//! ```rust
//! use raven_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("{"), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::as_str(PunctuationId::Ellipsis), "...");
//! ```

/// Stable identifier for every punctuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators / markers
    Comma,
    Colon,
    Semicolon,
    Dot,
    At,
    Ellipsis,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    punct(PunctuationId::Comma, ","),
    punct(PunctuationId::Colon, ":"),
    punct(PunctuationId::Semicolon, ";"),
    punct(PunctuationId::Dot, "."),
    punct(PunctuationId::At, "@"),
    punct(PunctuationId::Ellipsis, "..."),
    punct(PunctuationId::LParen, "("),
    punct(PunctuationId::RParen, ")"),
    punct(PunctuationId::LBracket, "["),
    punct(PunctuationId::RBracket, "]"),
    punct(PunctuationId::LBrace, "{"),
    punct(PunctuationId::RBrace, "}"),
];

/// Resolve a spelling to its punctuation id.
pub fn from_str(spelling: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == spelling).map(|p| p.id)
}

/// Return the canonical spelling for a punctuation id.
pub fn as_str(id: PunctuationId) -> &'static str {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a PUNCTUATION entry")
        .canonical
}

const fn punct(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_roundtrip() {
        for info in PUNCTUATION {
            assert_eq!(from_str(info.canonical), Some(info.id));
            assert_eq!(as_str(info.id), info.canonical);
        }
    }
}
