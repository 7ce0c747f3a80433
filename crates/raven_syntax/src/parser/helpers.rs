/// Cursor primitives and error helpers.
///
/// Every grammar rule is built on the `check_*` / `match_*` / `expect_*` family
/// defined here. `check` never moves the cursor, `match` consumes on success,
/// `expect` consumes or fails with a located diagnostic.
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor primitives
    // ========================================================================

    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.peek().is_eof()
    }

    /// Consume the current token, failing if the cursor already sits on `Eof`.
    fn advance(&mut self) -> ParseResult<&'a Token> {
        if self.is_at_end() {
            return Err(ParseError {
                diag: self.diags.unexpected_eof,
                location: self.peek().location,
                detail: String::new(),
            });
        }
        let token = &self.tokens[self.pos];
        self.pos += 1;
        Ok(token)
    }

    /// Move forward by one without failing; used only by recovery.
    fn bump(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    // ========================================================================
    // check / match / expect
    // ========================================================================

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_keyword(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().is_operator(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> ParseResult<&'a Token> {
        if self.check_keyword(id) {
            self.advance()
        } else {
            Err(self.error_expected(&format!("`{}`", keywords::as_str(id))))
        }
    }

    fn expect_op(&mut self, id: OperatorId) -> ParseResult<&'a Token> {
        if self.check_op(id) {
            self.advance()
        } else {
            Err(self.error_expected(&format!("`{}`", operators::as_str(id))))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId) -> ParseResult<&'a Token> {
        if self.check_punct(id) {
            self.advance()
        } else {
            Err(self.error_expected(&format!("`{}`", punctuation::as_str(id))))
        }
    }

    /// Consume an identifier token, returning its name and location.
    fn expect_ident(&mut self) -> ParseResult<(String, LocationId)> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            let location = self.peek().location;
            self.pos += 1;
            Ok((name, location))
        } else {
            Err(ParseError {
                diag: self.diags.expected_identifier,
                location: self.peek().location,
                detail: format!("found {}", Self::describe(self.peek())),
            })
        }
    }

    // ========================================================================
    // Errors and recovery
    // ========================================================================

    /// Build an "expected X, found Y" error at the current token.
    fn error_expected(&self, what: &str) -> ParseError {
        ParseError {
            diag: self.diags.expected_token,
            location: self.peek().location,
            detail: format!("expected {what}, found {}", Self::describe(self.peek())),
        }
    }

    fn describe(token: &Token) -> String {
        match &token.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", token.text),
        }
    }

    /// Record a parse error through the reporter.
    fn emit(&mut self, error: &ParseError) {
        self.reporter
            .report(error.diag, error.location, error.detail.as_str());
    }

    /// Skip forward to the next likely declaration boundary.
    ///
    /// Advances past the offending token, then stops either just after a `;`
    /// or `}` (a statement/body boundary) or just before a token that can
    /// begin a declaration.
    fn synchronize(&mut self) {
        self.bump();

        while !self.is_at_end() {
            if self.previous().is_punctuation(PunctuationId::Semicolon)
                || self.previous().is_punctuation(PunctuationId::RBrace)
            {
                return;
            }

            let token = self.peek();
            let at_decl_start = token.is_keyword(KeywordId::Let)
                || token.is_keyword(KeywordId::Const)
                || token.is_keyword(KeywordId::Function)
                || token.is_keyword(KeywordId::Struct)
                || token.is_keyword(KeywordId::Enum)
                || token.is_punctuation(PunctuationId::At);
            if at_decl_start {
                return;
            }

            self.bump();
        }
    }
}
