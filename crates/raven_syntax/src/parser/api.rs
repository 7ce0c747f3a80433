/// Parse a token stream into a single `Root` [`Node`].
///
/// This is the main public entrypoint for parsing. Grammar violations are
/// reported through `reporter` (never returned), and the parser resynchronizes
/// at declaration boundaries so the tree carries every declaration that parsed
/// cleanly. Callers decide what to do with a partial tree by consulting
/// `reporter.has_errors()`.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `raven_syntax::lexer`, ending in `Eof`.
/// - `reporter`: Shared reporter; also owns the location table the tokens
///   point into.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token], reporter: &mut DiagReporter) -> Node {
    if tokens.is_empty() {
        return Node::new(NodeKind::Root, LocationId::INVALID);
    }
    let root = Parser::new(tokens, reporter).parse();
    tracing::debug!(
        declarations = root.children.len(),
        errors = reporter.has_errors(),
        "parse complete"
    );
    root
}
