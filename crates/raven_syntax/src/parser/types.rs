/// Type parsing methods.
///
/// Grammar:
/// - identifier            → named type
/// - `[` type `]`          → array type
/// - `{` type `,` type `}` → map type (key, value)
/// - `(` types? `)` type   → function type (parameter types, then return type)
impl<'a> Parser<'a> {
    fn type_expr(&mut self) -> ParseResult<Node> {
        let location = self.peek().location;

        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.pos += 1;
            return Ok(Node::with_payload(
                NodeKind::PrimitiveType,
                Payload::Ident(name),
                location,
            ));
        }

        if self.match_punct(PunctuationId::LBracket) {
            let mut array = Node::new(NodeKind::ArrayType, location);
            array.add_child(self.type_expr()?);
            self.expect_punct(PunctuationId::RBracket)?;
            return Ok(array);
        }

        if self.match_punct(PunctuationId::LBrace) {
            let mut map = Node::new(NodeKind::MapType, location);
            map.add_child(self.type_expr()?);
            self.expect_punct(PunctuationId::Comma)?;
            map.add_child(self.type_expr()?);
            self.expect_punct(PunctuationId::RBrace)?;
            return Ok(map);
        }

        if self.match_punct(PunctuationId::LParen) {
            let mut function = Node::new(NodeKind::FunctionType, location);
            while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
                function.add_child(self.type_expr()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
            self.expect_punct(PunctuationId::RParen)?;
            // Return type follows the closing paren.
            function.add_child(self.type_expr()?);
            return Ok(function);
        }

        Err(self.error_expected("a type"))
    }
}
