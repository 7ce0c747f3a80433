/// Literal parsing methods.
///
/// Dispatches on the current token's kind: numbers, strings, booleans, `#tag`
/// literals, `[...]` array literals, and `{[k]: v, ...}` map literals.
impl<'a> Parser<'a> {
    fn literal(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        match &self.peek().kind {
            TokenKind::Int(value) => {
                let value = *value;
                self.pos += 1;
                Ok(Node::with_payload(NodeKind::IntLit, Payload::Int(value), location))
            }
            TokenKind::Float(value) => {
                let value = *value;
                self.pos += 1;
                Ok(Node::with_payload(NodeKind::FloatLit, Payload::Float(value), location))
            }
            TokenKind::String(value) => {
                let value = value.clone();
                self.pos += 1;
                Ok(Node::with_payload(NodeKind::StringLit, Payload::Str(value), location))
            }
            TokenKind::Tag(name) => {
                let name = name.clone();
                self.pos += 1;
                Ok(Node::with_payload(NodeKind::TagLit, Payload::Tag(name), location))
            }
            TokenKind::Keyword(KeywordId::True) => {
                self.pos += 1;
                Ok(Node::with_payload(NodeKind::BoolLit, Payload::Bool(true), location))
            }
            TokenKind::Keyword(KeywordId::False) => {
                self.pos += 1;
                Ok(Node::with_payload(NodeKind::BoolLit, Payload::Bool(false), location))
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => self.array_literal(),
            TokenKind::Punctuation(PunctuationId::LBrace) => self.map_literal(),
            _ => Err(self.error_expected("a literal")),
        }
    }

    /// `[` expr (`,` expr)* `]`, empty allowed, trailing comma allowed.
    fn array_literal(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_punct(PunctuationId::LBracket)?;
        let mut array = Node::new(NodeKind::ArrayLit, location);

        while !self.check_punct(PunctuationId::RBracket) && !self.is_at_end() {
            array.add_child(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }

        self.expect_punct(PunctuationId::RBracket)?;
        Ok(array)
    }

    /// `{` (`[` key `]` `:` value) (`,` ...)* `}`, empty allowed, trailing comma allowed.
    fn map_literal(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;
        self.expect_punct(PunctuationId::LBrace)?;
        let mut map = Node::new(NodeKind::MapLit, location);

        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let entry_location = self.peek().location;
            self.expect_punct(PunctuationId::LBracket)?;
            let key = self.expression()?;
            self.expect_punct(PunctuationId::RBracket)?;
            self.expect_punct(PunctuationId::Colon)?;
            let value = self.expression()?;

            let mut entry = Node::new(NodeKind::MapEntry, entry_location);
            entry.add_child(key);
            entry.add_child(value);
            map.add_child(entry);

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }

        self.expect_punct(PunctuationId::RBrace)?;
        Ok(map)
    }
}
