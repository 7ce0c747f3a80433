/// Parser unit tests.
///
/// Lives in the parser module (via `include!`) so tests can drive private
/// rules directly and observe cursor positions.
#[cfg(test)]
mod parser_tests {
    use super::*;
    use crate::lexer;

    fn setup(source: &str) -> (Vec<Token>, DiagReporter) {
        let mut reporter = DiagReporter::new();
        let tokens = lexer::lex(source, "test.rv", &mut reporter);
        assert!(!reporter.has_errors(), "lexing failed");
        (tokens, reporter)
    }

    fn parse_ok(source: &str) -> Node {
        let (tokens, mut reporter) = setup(source);
        let root = parse(&tokens, &mut reporter);
        assert!(
            !reporter.has_errors(),
            "unexpected parse errors:\n{}",
            reporter.render_all(Some(source), false)
        );
        root
    }

    fn ident_of(node: &Node) -> &str {
        match &node.payload {
            Some(Payload::Ident(name)) => name,
            other => panic!("expected an identifier payload, got {other:?}"),
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    #[test]
    fn var_decl_child_shape() {
        let root = parse_ok("let x = 5;");
        let decl = &root.children[0];
        assert_eq!(decl.kind, NodeKind::VarDecl);
        assert_eq!(decl.children.len(), 3);
        assert_eq!(decl.children[0].kind, NodeKind::Mutability);
        assert_eq!(ident_of(&decl.children[0]), "let");
        assert_eq!(ident_of(&decl.children[1]), "x");
        assert_eq!(decl.children[2].payload, Some(Payload::Int(5)));
    }

    #[test]
    fn var_decl_leaves_cursor_before_semicolon() {
        let (tokens, mut reporter) = setup("let x = 5;");
        let mut parser = Parser::new(&tokens, &mut reporter);
        let decl = parser.var_decl().unwrap();
        assert_eq!(decl.kind, NodeKind::VarDecl);
        // The terminator belongs to the caller.
        assert!(parser.peek().is_punctuation(PunctuationId::Semicolon));
    }

    #[test]
    fn var_decl_with_declared_type() {
        let root = parse_ok("const limit: int = 10;");
        let decl = &root.children[0];
        assert_eq!(ident_of(&decl.children[0]), "const");
        assert_eq!(decl.children[2].kind, NodeKind::PrimitiveType);
        assert_eq!(ident_of(&decl.children[2]), "int");
    }

    #[test]
    fn var_decl_requires_initializer() {
        let (tokens, mut reporter) = setup("let x;");
        parse(&tokens, &mut reporter);
        assert!(reporter.has_errors());
    }

    #[test]
    fn function_params_keep_source_order() {
        let root = parse_ok("function f(a: Int, b: Int) Int { }");
        let decl = &root.children[0];
        assert_eq!(decl.kind, NodeKind::FuncDecl);
        assert_eq!(ident_of(&decl.children[0]), "f");
        assert_eq!(decl.children[1].kind, NodeKind::Param);
        assert_eq!(ident_of(&decl.children[1].children[0]), "a");
        assert_eq!(decl.children[2].kind, NodeKind::Param);
        assert_eq!(ident_of(&decl.children[2].children[0]), "b");
        assert_eq!(decl.children[3].kind, NodeKind::PrimitiveType);
    }

    #[test]
    fn decorators_precede_the_name() {
        let root = parse_ok("@inline @pure function f() unit { }");
        let decl = &root.children[0];
        assert_eq!(decl.children[0].kind, NodeKind::Decorator);
        assert_eq!(ident_of(&decl.children[0]), "inline");
        assert_eq!(ident_of(&decl.children[1]), "pure");
        assert_eq!(decl.children[2].kind, NodeKind::Ident);
    }

    #[test]
    fn parameter_forms() {
        let root = parse_ok("function f(self, x: int = 0, ...rest: [int]) unit { }");
        let decl = &root.children[0];
        assert_eq!(decl.children[1].kind, NodeKind::SelfParam);
        let defaulted = &decl.children[2];
        assert_eq!(defaulted.kind, NodeKind::Param);
        assert_eq!(defaulted.children.len(), 3); // name, type, default
        let variadic = &decl.children[3];
        assert_eq!(variadic.kind, NodeKind::VariadicParam);
        assert_eq!(ident_of(&variadic.children[0]), "rest");
        assert_eq!(variadic.children[1].kind, NodeKind::ArrayType);
    }

    #[test]
    fn function_body_statements_are_direct_children() {
        let root = parse_ok("function f() int { let y = 1; return y; }");
        let decl = &root.children[0];
        // name, return type, then body statements in written order.
        assert_eq!(decl.children[2].kind, NodeKind::VarDecl);
        assert_eq!(decl.children[3].kind, NodeKind::ReturnStmt);
    }

    #[test]
    fn struct_members_interleave_fields_and_functions() {
        let source = "\
struct Point(x: int, y: int) {
    let magnitude = 0;
    function scale(self, by: int) unit { };
    private const origin = 0;
}";
        let root = parse_ok(source);
        let decl = &root.children[0];
        assert_eq!(decl.kind, NodeKind::StructDecl);
        assert_eq!(ident_of(&decl.children[0]), "Point");
        assert_eq!(decl.children[1].kind, NodeKind::Param);
        assert_eq!(decl.children[2].kind, NodeKind::Param);
        assert_eq!(decl.children[3].kind, NodeKind::Field);
        assert_eq!(decl.children[3].payload, None);
        assert_eq!(decl.children[4].kind, NodeKind::FuncDecl);
        let private_field = &decl.children[5];
        assert_eq!(private_field.kind, NodeKind::Field);
        assert_eq!(private_field.payload, Some(Payload::Bool(true)));
    }

    #[test]
    fn private_only_marks_fields() {
        let (tokens, mut reporter) = setup("struct S { private function f() unit { }; }");
        parse(&tokens, &mut reporter);
        assert!(reporter.has_errors());
    }

    #[test]
    fn enum_members_in_order() {
        let root = parse_ok("enum Color { Red, Green, Blue }");
        let decl = &root.children[0];
        assert_eq!(decl.kind, NodeKind::EnumDecl);
        assert_eq!(ident_of(&decl.children[0]), "Color");
        let members: Vec<_> = decl.children[1..].iter().map(ident_of).collect();
        assert_eq!(members, ["Red", "Green", "Blue"]);
    }

    #[test]
    fn enum_requires_a_member() {
        let (tokens, mut reporter) = setup("enum Empty { }");
        parse(&tokens, &mut reporter);
        assert!(reporter.has_errors());
    }

    // ========================================================================
    // Literals and types
    // ========================================================================

    #[test]
    fn empty_array_literal_consumes_exactly_its_brackets() {
        let (tokens, mut reporter) = setup("[]");
        let mut parser = Parser::new(&tokens, &mut reporter);
        let literal = parser.literal().unwrap();
        assert_eq!(literal.kind, NodeKind::ArrayLit);
        assert!(literal.children.is_empty());
        assert_eq!(parser.pos, 2);
    }

    #[test]
    fn map_literal_entries() {
        let (tokens, mut reporter) = setup(r#"{ [1]: "one", [2]: "two" }"#);
        let mut parser = Parser::new(&tokens, &mut reporter);
        let literal = parser.literal().unwrap();
        assert_eq!(literal.kind, NodeKind::MapLit);
        assert_eq!(literal.children.len(), 2);
        let entry = &literal.children[0];
        assert_eq!(entry.kind, NodeKind::MapEntry);
        assert_eq!(entry.children[0].payload, Some(Payload::Int(1)));
        assert_eq!(
            entry.children[1].payload,
            Some(Payload::Str("one".to_string()))
        );
    }

    #[test]
    fn tag_and_bool_literals() {
        let root = parse_ok("let a = #ready; let b = true;");
        assert_eq!(
            root.children[0].children[2].payload,
            Some(Payload::Tag("ready".to_string()))
        );
        assert_eq!(
            root.children[1].children[2].payload,
            Some(Payload::Bool(true))
        );
    }

    #[test]
    fn compound_types() {
        let root = parse_ok("let f: (int, [int]) {string, int} = g;");
        let ty = &root.children[0].children[2];
        assert_eq!(ty.kind, NodeKind::FunctionType);
        assert_eq!(ty.children[0].kind, NodeKind::PrimitiveType);
        assert_eq!(ty.children[1].kind, NodeKind::ArrayType);
        // Last child is the return type.
        assert_eq!(ty.children[2].kind, NodeKind::MapType);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn init_expr(source: &str) -> Node {
        let root = parse_ok(source);
        root.children[0].children[2].clone()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = init_expr("let x = 1 + 2 * 3;");
        assert_eq!(expr.payload, Some(Payload::Ident("+".to_string())));
        let rhs = &expr.children[1];
        assert_eq!(rhs.payload, Some(Payload::Ident("*".to_string())));
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = init_expr("let x = 1 - 2 - 3;");
        // ((1 - 2) - 3)
        assert_eq!(expr.children[0].payload, Some(Payload::Ident("-".to_string())));
        assert_eq!(expr.children[1].payload, Some(Payload::Int(3)));
    }

    #[test]
    fn logic_binds_loosest() {
        let expr = init_expr("let x = a == b && c < d || e;");
        assert_eq!(expr.payload, Some(Payload::Ident("||".to_string())));
        assert_eq!(
            expr.children[0].payload,
            Some(Payload::Ident("&&".to_string()))
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = init_expr("let x = (1 + 2) * 3;");
        assert_eq!(expr.payload, Some(Payload::Ident("*".to_string())));
        assert_eq!(
            expr.children[0].payload,
            Some(Payload::Ident("+".to_string()))
        );
    }

    #[test]
    fn postfix_chain_applies_left_to_right() {
        let expr = init_expr("let x = a.b(c)[0];");
        // Index(Call(Member(a, b), c), 0)
        assert_eq!(expr.kind, NodeKind::Index);
        let call = &expr.children[0];
        assert_eq!(call.kind, NodeKind::Call);
        assert_eq!(call.children[0].kind, NodeKind::Member);
        assert_eq!(ident_of(&call.children[1]), "c");
    }

    #[test]
    fn prefix_operators_nest() {
        let expr = init_expr("let x = !-a;");
        assert_eq!(expr.kind, NodeKind::Unary);
        assert_eq!(expr.payload, Some(Payload::Ident("!".to_string())));
        assert_eq!(expr.children[0].kind, NodeKind::Unary);
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn body_of(source: &str) -> Vec<Node> {
        let root = parse_ok(source);
        let decl = root.children[0].clone();
        // Skip name and return type.
        decl.children[2..].to_vec()
    }

    #[test]
    fn if_else_chain() {
        let body = body_of("function f() unit { if a { } else if b { } else { } }");
        let stmt = &body[0];
        assert_eq!(stmt.kind, NodeKind::IfStmt);
        assert_eq!(stmt.children.len(), 3);
        let else_if = &stmt.children[2];
        assert_eq!(else_if.kind, NodeKind::IfStmt);
        assert_eq!(else_if.children[2].kind, NodeKind::Block);
    }

    #[test]
    fn switch_cases_and_default() {
        let body =
            body_of("function f() unit { switch x { case 1: return; case 2: return; default: return; } }");
        let stmt = &body[0];
        assert_eq!(stmt.kind, NodeKind::SwitchStmt);
        assert_eq!(stmt.children.len(), 4); // subject + three arms
        let first = &stmt.children[1];
        assert_eq!(first.kind, NodeKind::SwitchCase);
        assert_eq!(first.children[0].payload, Some(Payload::Int(1)));
        let default = &stmt.children[3];
        assert_eq!(default.children[0].kind, NodeKind::ReturnStmt);
    }

    #[test]
    fn defer_wraps_a_statement() {
        let body = body_of("function f() unit { defer close(handle); }");
        let stmt = &body[0];
        assert_eq!(stmt.kind, NodeKind::DeferStmt);
        assert_eq!(stmt.children[0].kind, NodeKind::ExprStmt);
    }

    #[test]
    fn return_value_is_optional() {
        let body = body_of("function f() unit { return; return 1; }");
        assert!(body[0].children.is_empty());
        assert_eq!(body[1].children[0].payload, Some(Payload::Int(1)));
    }

    #[test]
    fn try_catch_shape() {
        let body = body_of("function f() unit { try { throw e; } catch err { } }");
        let stmt = &body[0];
        assert_eq!(stmt.kind, NodeKind::TryStmt);
        assert_eq!(stmt.children[0].kind, NodeKind::Block);
        assert_eq!(ident_of(&stmt.children[1]), "err");
        assert_eq!(stmt.children[2].kind, NodeKind::Block);
        assert_eq!(stmt.children[0].children[0].kind, NodeKind::ThrowStmt);
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    #[test]
    fn recovery_reports_multiple_errors_and_keeps_good_declarations() {
        let source = "let = 1;\nlet x = 2;\nenum { }\nlet y = 3;";
        let (tokens, mut reporter) = setup(source);
        let root = parse(&tokens, &mut reporter);

        assert!(reporter.count_by_level(raven_core::DiagLevel::Error) >= 2);
        let kept: Vec<_> = root
            .children
            .iter()
            .filter(|d| d.kind == NodeKind::VarDecl)
            .map(|d| ident_of(&d.children[1]).to_string())
            .collect();
        assert_eq!(kept, ["x", "y"]);
    }

    #[test]
    fn error_location_points_at_the_offending_token() {
        let source = "let 5 = 1;";
        let (tokens, mut reporter) = setup(source);
        parse(&tokens, &mut reporter);

        let entry = reporter.entries().last().expect("one diagnostic");
        let location = reporter.locations().get(entry.location);
        assert_eq!((location.line, location.column), (1, 5));
    }

    #[test]
    fn stray_top_level_token_is_a_single_error() {
        let (tokens, mut reporter) = setup("42");
        let root = parse(&tokens, &mut reporter);
        assert!(root.children.is_empty());
        assert_eq!(reporter.count_by_level(raven_core::DiagLevel::Error), 1);
    }
}
