/// Declaration parsing methods.
///
/// Child-order contracts (consumed by later compiler stages):
/// - `VarDecl`: mutability marker, name, optional declared type, initializer.
/// - `FuncDecl`: decorators, name, parameters, return type, body statements.
/// - `StructDecl`: name, constructor parameters, members in written order.
/// - `EnumDecl`: name, members (1+).
impl<'a> Parser<'a> {
    /// Dispatch on the current token to the declaration rule it begins.
    fn declaration(&mut self) -> ParseResult<Node> {
        if self.check_keyword(KeywordId::Let) || self.check_keyword(KeywordId::Const) {
            self.var_decl()
        } else if self.check_keyword(KeywordId::Function) || self.check_punct(PunctuationId::At) {
            self.func_decl()
        } else if self.check_keyword(KeywordId::Struct) {
            self.struct_decl()
        } else if self.check_keyword(KeywordId::Enum) {
            self.enum_decl()
        } else {
            Err(self.error_expected("a declaration"))
        }
    }

    /// `let`/`const` name [`:` type] `=` expr
    ///
    /// The terminating `;` belongs to the caller, so this rule can serve both
    /// top-level declarations and statements inside bodies.
    fn var_decl(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        let mutability = self.advance()?;

        let mut decl = Node::new(NodeKind::VarDecl, location);
        decl.add_child(Node::with_payload(
            NodeKind::Mutability,
            Payload::Ident(mutability.text.clone()),
            mutability.location,
        ));

        let (name, name_location) = self.expect_ident()?;
        decl.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));

        if self.match_punct(PunctuationId::Colon) {
            decl.add_child(self.type_expr()?);
        }

        self.expect_op(OperatorId::Eq)?;
        decl.add_child(self.expression()?);
        Ok(decl)
    }

    /// (`@`name)* `function` name `(` params? `)` return-type `{` stmts `}`
    ///
    /// Body statements land as direct children after the return type.
    fn func_decl(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;

        let mut decorators = Vec::new();
        while self.check_punct(PunctuationId::At) {
            let at_location = self.peek().location;
            self.pos += 1;
            let (name, _) = self.expect_ident()?;
            decorators.push(Node::with_payload(
                NodeKind::Decorator,
                Payload::Ident(name),
                at_location,
            ));
        }

        self.expect_keyword(KeywordId::Function)?;

        let mut decl = Node::new(NodeKind::FuncDecl, location);
        for decorator in decorators {
            decl.add_child(decorator);
        }

        let (name, name_location) = self.expect_ident()?;
        decl.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));

        self.expect_punct(PunctuationId::LParen)?;
        while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
            decl.add_child(self.parameter()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen)?;

        decl.add_child(self.type_expr()?);

        self.expect_punct(PunctuationId::LBrace)?;
        self.statements_into(&mut decl)?;
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(decl)
    }

    /// `self` | `...` name `:` type | name `:` type [`=` default]
    fn parameter(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;

        if self.match_keyword(KeywordId::SelfKw) {
            return Ok(Node::new(NodeKind::SelfParam, location));
        }

        if self.match_punct(PunctuationId::Ellipsis) {
            let mut param = Node::new(NodeKind::VariadicParam, location);
            let (name, name_location) = self.expect_ident()?;
            param.add_child(Node::with_payload(
                NodeKind::Ident,
                Payload::Ident(name),
                name_location,
            ));
            self.expect_punct(PunctuationId::Colon)?;
            param.add_child(self.type_expr()?);
            return Ok(param);
        }

        let mut param = Node::new(NodeKind::Param, location);
        let (name, name_location) = self.expect_ident()?;
        param.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));
        self.expect_punct(PunctuationId::Colon)?;
        param.add_child(self.type_expr()?);
        if self.match_op(OperatorId::Eq) {
            param.add_child(self.expression()?);
        }
        Ok(param)
    }

    /// `struct` name [`(` ctor-params `)`] `{` (member `;`)* `}`
    fn struct_decl(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Struct)?;

        let mut decl = Node::new(NodeKind::StructDecl, location);
        let (name, name_location) = self.expect_ident()?;
        decl.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));

        if self.match_punct(PunctuationId::LParen) {
            while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
                decl.add_child(self.parameter()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
            self.expect_punct(PunctuationId::RParen)?;
        }

        self.expect_punct(PunctuationId::LBrace)?;
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            decl.add_child(self.struct_member()?);
            self.expect_punct(PunctuationId::Semicolon)?;
        }
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(decl)
    }

    /// One struct member: a (possibly `private`) field or a nested function.
    fn struct_member(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        let private = self.match_keyword(KeywordId::Private);

        if self.check_keyword(KeywordId::Let) || self.check_keyword(KeywordId::Const) {
            return self.field_member(private, location);
        }
        if private {
            return Err(self.error_expected("`let` or `const` after `private`"));
        }
        if self.check_keyword(KeywordId::Function) || self.check_punct(PunctuationId::At) {
            return self.func_decl();
        }
        Err(self.error_expected("a struct member"))
    }

    /// [`private`] `let`/`const` name [`:` type] `=` expr
    fn field_member(&mut self, private: bool, location: LocationId) -> ParseResult<Node> {
        let mutability = self.advance()?;

        let mut field = if private {
            Node::with_payload(NodeKind::Field, Payload::Bool(true), location)
        } else {
            Node::new(NodeKind::Field, location)
        };
        field.add_child(Node::with_payload(
            NodeKind::Mutability,
            Payload::Ident(mutability.text.clone()),
            mutability.location,
        ));

        let (name, name_location) = self.expect_ident()?;
        field.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));

        if self.match_punct(PunctuationId::Colon) {
            field.add_child(self.type_expr()?);
        }

        self.expect_op(OperatorId::Eq)?;
        field.add_child(self.expression()?);
        Ok(field)
    }

    /// `enum` name `{` member (`,` member)* [`,`] `}`
    fn enum_decl(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_keyword(KeywordId::Enum)?;

        let mut decl = Node::new(NodeKind::EnumDecl, location);
        let (name, name_location) = self.expect_ident()?;
        decl.add_child(Node::with_payload(
            NodeKind::Ident,
            Payload::Ident(name),
            name_location,
        ));

        self.expect_punct(PunctuationId::LBrace)?;
        // At least one member is required.
        loop {
            let (member, member_location) = self.expect_ident()?;
            decl.add_child(Node::with_payload(
                NodeKind::EnumMember,
                Payload::Ident(member),
                member_location,
            ));
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
            if self.check_punct(PunctuationId::RBrace) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(decl)
    }
}
