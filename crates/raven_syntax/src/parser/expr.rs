/// Expression parsing methods.
///
/// Binary expressions use precedence climbing driven entirely by the
/// `raven_core::lang::operators` registry: the parser asks the table for each
/// operator's binding power and associativity instead of hard-coding a ladder,
/// so parser and tooling can never disagree about precedence.
///
/// ## Notes
/// - `Unary`/`Binary` nodes carry the operator's canonical spelling as an
///   `Ident` payload; later stages dispatch on it.
/// - `=` never appears inside an expression; it belongs to declarations and
///   parameter defaults only.
impl<'a> Parser<'a> {
    fn expression(&mut self) -> ParseResult<Node> {
        self.binary_expr(0)
    }

    /// Precedence-climbing loop over registry-declared infix operators.
    fn binary_expr(&mut self, min_precedence: u8) -> ParseResult<Node> {
        let mut left = self.unary_expr()?;

        loop {
            let TokenKind::Operator(op) = self.peek().kind else {
                break;
            };
            let Some(precedence) = operators::infix_precedence(op) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }

            let op_location = self.peek().location;
            self.pos += 1;

            let next_min = match operators::info_for(op).associativity {
                Associativity::Left => precedence + 1,
                Associativity::Right | Associativity::None => precedence,
            };
            let right = self.binary_expr(next_min)?;

            let mut node = Node::with_payload(
                NodeKind::Binary,
                Payload::Ident(operators::as_str(op).to_string()),
                op_location,
            );
            node.add_child(left);
            node.add_child(right);
            left = node;
        }

        Ok(left)
    }

    /// Prefix `!` and `-`, both binding tighter than any infix operator.
    fn unary_expr(&mut self) -> ParseResult<Node> {
        let is_prefix = self.check_op(OperatorId::Not) || self.check_op(OperatorId::Minus);
        if is_prefix {
            let location = self.peek().location;
            let spelling = self.peek().text.clone();
            self.pos += 1;
            let mut node =
                Node::with_payload(NodeKind::Unary, Payload::Ident(spelling), location);
            node.add_child(self.unary_expr()?);
            return Ok(node);
        }
        self.postfix_expr()
    }

    /// Calls, indexing, and member access, applied left to right.
    fn postfix_expr(&mut self) -> ParseResult<Node> {
        let mut expr = self.primary_expr()?;

        loop {
            let location = self.peek().location;
            if self.match_punct(PunctuationId::LParen) {
                let mut call = Node::new(NodeKind::Call, location);
                call.add_child(expr);
                while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
                    call.add_child(self.expression()?);
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
                self.expect_punct(PunctuationId::RParen)?;
                expr = call;
            } else if self.match_punct(PunctuationId::LBracket) {
                let mut index = Node::new(NodeKind::Index, location);
                index.add_child(expr);
                index.add_child(self.expression()?);
                self.expect_punct(PunctuationId::RBracket)?;
                expr = index;
            } else if self.match_punct(PunctuationId::Dot) {
                let (name, name_location) = self.expect_ident()?;
                let mut member = Node::new(NodeKind::Member, location);
                member.add_child(expr);
                member.add_child(Node::with_payload(
                    NodeKind::Ident,
                    Payload::Ident(name),
                    name_location,
                ));
                expr = member;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parenthesized expressions, identifiers, and literals.
    fn primary_expr(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;

        if self.match_punct(PunctuationId::LParen) {
            let expr = self.expression()?;
            self.expect_punct(PunctuationId::RParen)?;
            return Ok(expr);
        }

        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.pos += 1;
            return Ok(Node::with_payload(
                NodeKind::Ident,
                Payload::Ident(name),
                location,
            ));
        }

        // `self` reads like any other name inside a method body.
        if self.match_keyword(KeywordId::SelfKw) {
            return Ok(Node::with_payload(
                NodeKind::Ident,
                Payload::Ident("self".to_string()),
                location,
            ));
        }

        match self.literal() {
            Ok(node) => Ok(node),
            // Report the missing construct as an expression, not a literal.
            Err(_) if self.peek().is_eof() => Err(ParseError {
                diag: self.diags.unexpected_eof,
                location,
                detail: "expected an expression".to_string(),
            }),
            Err(_) => Err(ParseError {
                diag: self.diags.expected_expression,
                location,
                detail: format!("found {}", Self::describe(self.peek())),
            }),
        }
    }
}
