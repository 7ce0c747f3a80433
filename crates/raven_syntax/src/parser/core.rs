/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its diagnostic vocabulary, and the
/// top-level `parse()` driver with declaration-boundary error recovery.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".
/// - [`ParseError`] carries everything needed to report a failure: the
///   diagnostic id, the offending token's location, and the detail text.
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct ParseError {
    pub diag: DiagId,
    pub location: LocationId,
    pub detail: String,
}

type ParseResult<T> = Result<T, ParseError>;

/// Diagnostic ids the parser reports through, registered once per run.
struct SyntaxDiags {
    expected_token: DiagId,
    expected_identifier: DiagId,
    expected_expression: DiagId,
    unexpected_eof: DiagId,
}

impl SyntaxDiags {
    fn register(reporter: &mut DiagReporter) -> Self {
        Self {
            expected_token: reporter.register(
                DiagMetadata::error("expected-token", "unexpected token").with_code("P0001"),
            ),
            expected_identifier: reporter.register(
                DiagMetadata::error("expected-identifier", "expected an identifier")
                    .with_code("P0002"),
            ),
            expected_expression: reporter.register(
                DiagMetadata::error("expected-expression", "expected an expression")
                    .with_code("P0003"),
            ),
            unexpected_eof: reporter.register(
                DiagMetadata::error("unexpected-eof", "unexpected end of input")
                    .with_code("P0004")
                    .with_help("the declaration above may be missing a closing delimiter"),
            ),
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at
///   declaration boundaries, so a run reports as many problems as it can find.
/// - Token streams produced by `crate::lexer` always end with an `Eof` token;
///   the cursor primitives rely on that sentinel.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    reporter: &'a mut DiagReporter,
    diags: SyntaxDiags,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream, registering its diagnostic
    /// vocabulary with `reporter`.
    pub fn new(tokens: &'a [Token], reporter: &'a mut DiagReporter) -> Self {
        let diags = SyntaxDiags::register(reporter);
        Self {
            tokens,
            pos: 0,
            reporter,
            diags,
        }
    }

    /// Parse the entire token stream into a single `Root` node.
    ///
    /// Failures never abort the whole parse: each bad declaration is reported
    /// through the reporter and the cursor skips to the next declaration
    /// boundary, so the returned tree holds every declaration that parsed.
    pub fn parse(mut self) -> Node {
        let root_location = self
            .tokens
            .first()
            .map(|t| t.location)
            .unwrap_or(LocationId::INVALID);
        let mut root = Node::new(NodeKind::Root, root_location);

        while !self.is_at_end() {
            match self.top_level_declaration() {
                Ok(decl) => root.add_child(decl),
                Err(e) => {
                    self.emit(&e);
                    self.synchronize();
                }
            }
        }

        root
    }

    /// One top-level declaration plus its terminator.
    ///
    /// Variable declarations are `;`-terminated by this caller; brace-ended
    /// declarations terminate themselves.
    fn top_level_declaration(&mut self) -> ParseResult<Node> {
        let decl = self.declaration()?;
        if decl.kind == NodeKind::VarDecl {
            self.expect_punct(PunctuationId::Semicolon)?;
        }
        Ok(decl)
    }
}
