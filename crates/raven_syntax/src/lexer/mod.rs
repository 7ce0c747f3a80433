//! Lexer for the Raven programming language
//!
//! Handles tokenization including:
//! - Keywords (let, const, function, struct, enum, etc.)
//! - Identifiers and literals (int, float, string, tag)
//! - Operators and punctuation (==, !=, &&, ..., etc.)
//! - Line comments (`// ...`)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//!
//! ## Notes
//! - The lexer never fails: malformed input is reported through the shared
//!   `DiagReporter` and skipped, so later phases always receive a token stream
//!   ending in `Eof`.

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use raven_core::lang::operators::{self, OperatorId};
use raven_core::lang::punctuation::PunctuationId;
use raven_core::{DiagId, DiagLevel, DiagMetadata, DiagReporter, LocationId};

// ============================================================================
// LEXER DIAGNOSTICS
// ============================================================================

/// Diagnostic ids the lexer reports through, registered once per run.
struct LexDiags {
    invalid_char: DiagId,
    unterminated_string: DiagId,
    invalid_number: DiagId,
}

impl LexDiags {
    fn register(reporter: &mut DiagReporter) -> Self {
        Self {
            invalid_char: reporter.register(
                DiagMetadata::error("invalid-character", "unexpected character in input")
                    .with_code("L0001"),
            ),
            unterminated_string: reporter.register(
                DiagMetadata::new(
                    "unterminated-string",
                    DiagLevel::Fatal,
                    "string literal is never closed",
                )
                .with_code("L0002")
                .with_help("add a closing `\"` before the end of the line"),
            ),
            invalid_number: reporter.register(
                DiagMetadata::error("invalid-number", "malformed numeric literal")
                    .with_code("L0003"),
            ),
        }
    }
}

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Raven source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers
/// - Numeric, string, and `#tag` literals
/// - Operators and punctuation via the `raven_core::lang` registries
/// - `//` line comments
struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    path: &'a str,
    tokens: Vec<Token>,
    diags: LexDiags,
}

impl<'a> Lexer<'a> {
    fn new(source: &str, path: &'a str, reporter: &mut DiagReporter) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            path,
            tokens: Vec::new(),
            diags: LexDiags::register(reporter),
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Intern a location for a token starting at `(line, column)` spanning `length` chars.
    fn record_location(
        &self,
        reporter: &mut DiagReporter,
        line: u32,
        column: u32,
        length: u32,
    ) -> LocationId {
        reporter
            .locations_mut()
            .add(self.path, line, column, length)
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, location: LocationId) {
        self.tokens.push(Token::new(kind, text, location));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self, reporter: &mut DiagReporter) {
        let Some(c) = self.peek() else { return };

        // Whitespace carries no tokens.
        if c.is_whitespace() {
            self.advance();
            return;
        }

        // Line comments run to end of line.
        if c == '/' && self.peek_next() == Some('/') {
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            return;
        }

        let line = self.line;
        let column = self.column;

        if c.is_ascii_digit() {
            self.scan_number(reporter, line, column);
        } else if c == '"' {
            self.scan_string(reporter, line, column);
        } else if c == '#' {
            self.scan_tag(reporter, line, column);
        } else if c.is_alphabetic() || c == '_' {
            self.scan_ident(reporter, line, column);
        } else {
            self.scan_operator_or_punct(reporter, line, column);
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    fn scan_number(&mut self, reporter: &mut DiagReporter, line: u32, column: u32) {
        let mut text = String::new();
        let mut is_float = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else if c == '.' && !is_float && self.peek_next().is_some_and(|n| n.is_ascii_digit())
            {
                is_float = true;
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let location = self.record_location(reporter, line, column, text.chars().count() as u32);
        if is_float {
            match text.parse::<f64>() {
                Ok(value) => self.push(TokenKind::Float(value), text, location),
                Err(_) => reporter.report(self.diags.invalid_number, location, &text),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => self.push(TokenKind::Int(value), text, location),
                Err(_) => {
                    reporter.report(
                        self.diags.invalid_number,
                        location,
                        format!("`{text}` does not fit in a 64-bit integer"),
                    );
                }
            }
        }
    }

    fn scan_string(&mut self, reporter: &mut DiagReporter, line: u32, column: u32) {
        self.advance(); // opening quote
        let mut value = String::new();
        let mut raw = String::from("\"");

        loop {
            match self.peek() {
                None | Some('\n') => {
                    let location = self.record_location(
                        reporter,
                        line,
                        column,
                        raw.chars().count() as u32,
                    );
                    reporter.report(self.diags.unterminated_string, location, "");
                    return;
                }
                Some('"') => {
                    self.advance();
                    raw.push('"');
                    break;
                }
                Some('\\') => {
                    self.advance();
                    raw.push('\\');
                    let Some(esc) = self.advance() else { continue };
                    raw.push(esc);
                    match esc {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '0' => value.push('\0'),
                        other => value.push(other),
                    }
                }
                Some(c) => {
                    self.advance();
                    raw.push(c);
                    value.push(c);
                }
            }
        }

        let location = self.record_location(reporter, line, column, raw.chars().count() as u32);
        self.push(TokenKind::String(value), raw, location);
    }

    fn scan_tag(&mut self, reporter: &mut DiagReporter, line: u32, column: u32) {
        self.advance(); // '#'
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let length = name.chars().count() as u32 + 1;
        let location = self.record_location(reporter, line, column, length);
        if name.is_empty() {
            reporter.report(self.diags.invalid_char, location, "`#` must introduce a tag name");
            return;
        }
        let text = format!("#{name}");
        self.push(TokenKind::Tag(name), text, location);
    }

    fn scan_ident(&mut self, reporter: &mut DiagReporter, line: u32, column: u32) {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let location = self.record_location(reporter, line, column, text.chars().count() as u32);
        let kind = match keyword_id(&text) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(text.clone()),
        };
        self.push(kind, text, location);
    }

    // ========================================================================
    // Operators and punctuation
    // ========================================================================

    /// Longest-match scan against the operator and punctuation registries.
    fn scan_operator_or_punct(&mut self, reporter: &mut DiagReporter, line: u32, column: u32) {
        // `...` is the only three-character token.
        if self.lookahead_is("...") {
            let location = self.record_location(reporter, line, column, 3);
            self.advance();
            self.advance();
            self.advance();
            self.push(TokenKind::Punctuation(PunctuationId::Ellipsis), "...", location);
            return;
        }

        // Two-character operators before their one-character prefixes.
        for spelling in ["==", "!=", "<=", ">=", "&&", "||"] {
            if self.lookahead_is(spelling) {
                let id = operators::from_str(spelling)
                    .expect("INVARIANT: registry covers every scanned operator spelling");
                let location = self.record_location(reporter, line, column, 2);
                self.advance();
                self.advance();
                self.push(TokenKind::Operator(id), spelling, location);
                return;
            }
        }

        let Some(c) = self.peek() else { return };
        let single = c.to_string();

        if let Some(id) = operators::from_str(&single) {
            let location = self.record_location(reporter, line, column, 1);
            self.advance();
            self.push(TokenKind::Operator(id), single, location);
            return;
        }
        if let Some(id) = raven_core::lang::punctuation::from_str(&single) {
            let location = self.record_location(reporter, line, column, 1);
            self.advance();
            self.push(TokenKind::Punctuation(id), single, location);
            return;
        }

        let location = self.record_location(reporter, line, column, 1);
        self.advance();
        reporter.report(self.diags.invalid_char, location, format!("`{c}`"));
    }

    fn lookahead_is(&self, spelling: &str) -> bool {
        spelling
            .chars()
            .enumerate()
            .all(|(i, c)| self.chars.get(self.pos + i) == Some(&c))
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Tokenize Raven source text.
///
/// Lexical problems are reported through `reporter` rather than returned; the
/// resulting stream always ends with an `Eof` token so the parser never runs
/// off the end.
#[tracing::instrument(skip_all, fields(path = path, source_len = source.len()))]
pub fn lex(source: &str, path: &str, reporter: &mut DiagReporter) -> Vec<Token> {
    let mut lexer = Lexer::new(source, path, reporter);
    while !lexer.is_at_end() {
        lexer.scan_token(reporter);
    }

    let eof_location = reporter
        .locations_mut()
        .add(lexer.path, lexer.line, lexer.column, 0);
    lexer.tokens.push(Token::new(TokenKind::Eof, "", eof_location));

    tracing::debug!(token_count = lexer.tokens.len(), "lexing complete");
    lexer.tokens
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod lexer_tests {
    use super::*;
    use raven_core::lang::keywords::KeywordId;

    fn lex_ok(source: &str) -> Vec<Token> {
        let mut reporter = DiagReporter::new();
        let tokens = lex(source, "test.rv", &mut reporter);
        assert!(!reporter.has_errors(), "unexpected lex errors");
        tokens
    }

    #[test]
    fn keywords_and_idents_are_distinguished() {
        let tokens = lex_ok("let letter");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::Let));
        assert_eq!(tokens[1].kind, TokenKind::Ident("letter".to_string()));
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn numeric_literals() {
        let tokens = lex_ok("42 3.25");
        assert_eq!(tokens[0].kind, TokenKind::Int(42));
        assert_eq!(tokens[1].kind, TokenKind::Float(3.25));
    }

    #[test]
    fn string_escapes() {
        let tokens = lex_ok(r#""a\nb""#);
        assert_eq!(tokens[0].kind, TokenKind::String("a\nb".to_string()));
        assert_eq!(tokens[0].text, r#""a\nb""#);
    }

    #[test]
    fn tag_literal() {
        let tokens = lex_ok("#ready");
        assert_eq!(tokens[0].kind, TokenKind::Tag("ready".to_string()));
        assert_eq!(tokens[0].text, "#ready");
    }

    #[test]
    fn two_char_operators_win_over_one_char() {
        let tokens = lex_ok("a <= b == c");
        assert!(tokens[1].is_operator(OperatorId::LtEq));
        assert!(tokens[3].is_operator(OperatorId::EqEq));
    }

    #[test]
    fn ellipsis_is_a_single_token() {
        let tokens = lex_ok("...rest");
        assert!(tokens[0].is_punctuation(PunctuationId::Ellipsis));
        assert_eq!(tokens[1].kind, TokenKind::Ident("rest".to_string()));
    }

    #[test]
    fn comments_are_skipped() {
        let tokens = lex_ok("let x // trailing\nlet");
        assert_eq!(tokens.len(), 4); // let, x, let, eof
    }

    #[test]
    fn unterminated_string_is_fatal() {
        let mut reporter = DiagReporter::new();
        lex("\"oops", "test.rv", &mut reporter);
        assert!(reporter.has_errors());
    }

    #[test]
    fn locations_track_line_and_column() {
        let mut reporter = DiagReporter::new();
        let tokens = lex("let\n  x", "test.rv", &mut reporter);
        let loc = reporter.locations().get(tokens[1].location);
        assert_eq!((loc.line, loc.column, loc.length), (2, 3, 1));
    }

    #[test]
    fn invalid_character_is_reported_and_skipped() {
        let mut reporter = DiagReporter::new();
        let tokens = lex("a $ b", "test.rv", &mut reporter);
        assert!(reporter.has_errors());
        // `$` produced no token; the stream is a, b, eof.
        assert_eq!(tokens.len(), 3);
    }
}
