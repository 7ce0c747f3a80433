/// Statement parsing methods.
///
/// Statement forms: local `let`/`const` declarations, `if`, `switch`, `defer`,
/// `return`, `throw`, `try`/`catch`, nested blocks, and bare expression
/// statements. Statements that do not end in `}` are `;`-terminated by the
/// enclosing statement list, never by the statement rule itself.
impl<'a> Parser<'a> {
    fn statement(&mut self) -> ParseResult<Node> {
        if self.check_keyword(KeywordId::Let) || self.check_keyword(KeywordId::Const) {
            return self.var_decl();
        }
        if self.check_keyword(KeywordId::If) {
            return self.if_stmt();
        }
        if self.check_keyword(KeywordId::Switch) {
            return self.switch_stmt();
        }
        if self.check_keyword(KeywordId::Defer) {
            return self.defer_stmt();
        }
        if self.check_keyword(KeywordId::Return) {
            return self.return_stmt();
        }
        if self.check_keyword(KeywordId::Throw) {
            return self.throw_stmt();
        }
        if self.check_keyword(KeywordId::Try) {
            return self.try_stmt();
        }
        if self.check_punct(PunctuationId::LBrace) {
            return self.block();
        }

        let location = self.peek().location;
        let mut stmt = Node::new(NodeKind::ExprStmt, location);
        stmt.add_child(self.expression()?);
        Ok(stmt)
    }

    /// Parse `;`-separated statements into `parent` until a `}` is seen.
    ///
    /// The closing `}` itself is left for the caller, which also owns the
    /// opening `{`.
    fn statements_into(&mut self, parent: &mut Node) -> ParseResult<()> {
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let stmt = self.statement()?;
            let needs_semicolon = Self::needs_semicolon(&stmt);
            parent.add_child(stmt);
            if needs_semicolon {
                self.expect_punct(PunctuationId::Semicolon)?;
            }
        }
        Ok(())
    }

    /// Whether a statement requires a trailing `;` from the enclosing list.
    ///
    /// Brace-ended statements terminate themselves; `defer` takes its answer
    /// from the statement it wraps.
    fn needs_semicolon(stmt: &Node) -> bool {
        match stmt.kind {
            NodeKind::IfStmt | NodeKind::SwitchStmt | NodeKind::TryStmt | NodeKind::Block => false,
            NodeKind::DeferStmt => stmt.children.first().map_or(true, Self::needs_semicolon),
            _ => true,
        }
    }

    /// `{` stmts `}`
    fn block(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_punct(PunctuationId::LBrace)?;
        let mut block = Node::new(NodeKind::Block, location);
        self.statements_into(&mut block)?;
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(block)
    }

    /// `if` expr block [`else` (if-stmt | block)]
    ///
    /// Children: condition, then-block, optional else arm (a `Block` or a
    /// nested `IfStmt` for `else if` chains).
    fn if_stmt(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::If)?;

        let mut stmt = Node::new(NodeKind::IfStmt, location);
        stmt.add_child(self.expression()?);
        stmt.add_child(self.block()?);

        if self.match_keyword(KeywordId::Else) {
            if self.check_keyword(KeywordId::If) {
                stmt.add_child(self.if_stmt()?);
            } else {
                stmt.add_child(self.block()?);
            }
        }
        Ok(stmt)
    }

    /// `switch` expr `{` arm* `}` where an arm is `case` expr `:` stmts or
    /// `default` `:` stmts.
    ///
    /// Children: subject, then one `SwitchCase` per arm; a `default` arm is a
    /// `SwitchCase` whose first child is a statement rather than a test.
    fn switch_stmt(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Switch)?;

        let mut stmt = Node::new(NodeKind::SwitchStmt, location);
        stmt.add_child(self.expression()?);

        self.expect_punct(PunctuationId::LBrace)?;
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            stmt.add_child(self.switch_case()?);
        }
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(stmt)
    }

    fn switch_case(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        let mut case = Node::new(NodeKind::SwitchCase, location);

        if self.match_keyword(KeywordId::Case) {
            case.add_child(self.expression()?);
        } else {
            self.expect_keyword(KeywordId::Default)?;
        }
        self.expect_punct(PunctuationId::Colon)?;

        // Arm bodies run until the next arm or the switch's closing brace.
        while !self.check_keyword(KeywordId::Case)
            && !self.check_keyword(KeywordId::Default)
            && !self.check_punct(PunctuationId::RBrace)
            && !self.is_at_end()
        {
            let inner = self.statement()?;
            let needs_semicolon = Self::needs_semicolon(&inner);
            case.add_child(inner);
            if needs_semicolon {
                self.expect_punct(PunctuationId::Semicolon)?;
            }
        }
        Ok(case)
    }

    /// `defer` statement
    fn defer_stmt(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Defer)?;
        let mut stmt = Node::new(NodeKind::DeferStmt, location);
        stmt.add_child(self.statement()?);
        Ok(stmt)
    }

    /// `return` [expr]
    fn return_stmt(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Return)?;
        let mut stmt = Node::new(NodeKind::ReturnStmt, location);
        if !self.check_punct(PunctuationId::Semicolon) && !self.check_punct(PunctuationId::RBrace)
        {
            stmt.add_child(self.expression()?);
        }
        Ok(stmt)
    }

    /// `throw` expr
    fn throw_stmt(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Throw)?;
        let mut stmt = Node::new(NodeKind::ThrowStmt, location);
        stmt.add_child(self.expression()?);
        Ok(stmt)
    }

    /// `try` block `catch` name block
    ///
    /// Children: try-block, the caught binding's name, catch-block.
    fn try_stmt(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Try)?;

        let mut stmt = Node::new(NodeKind::TryStmt, location);
        stmt.add_child(self.block()?);

        self.expect_keyword(KeywordId::Catch)?;
        let (name, name_location) = self.expect_ident()?;
        stmt.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));
        stmt.add_child(self.block()?);
        Ok(stmt)
    }
}
