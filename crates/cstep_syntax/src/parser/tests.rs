#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover each statement form, precedence and associativity, the error messages for
/// mismatches, and the shape of the step trace (in particular that the routine stack nests).
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, SyntaxError> {
        let tokens = lexer::lex(source).expect("lexing failed");
        parse(&tokens)
    }

    fn traced(source: &str) -> (Result<Program, SyntaxError>, Vec<ParserStep>) {
        let tokens = lexer::lex(source).expect("lexing failed");
        let mut parser = Parser::new(&tokens);
        let result = parser.parse();
        (result, parser.into_trace().into_vec())
    }

    fn value_of(program: &Program, index: usize) -> String {
        match &program.statements[index].node {
            Statement::Assignment(a) => a.value.to_string(),
            Statement::Declaration(d) => d.initializer.as_ref().map(|e| e.to_string()).unwrap_or_default(),
            Statement::FunctionCall(c) => c.args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", "),
        }
    }

    #[test]
    fn test_declaration_with_and_without_initializer() {
        let program = parse_str("int x;\nfloat y = 2.5;").unwrap();
        assert_eq!(program.statements.len(), 2);
        assert_eq!(program.statements[1].line, 2);
        match &program.statements[1].node {
            Statement::Declaration(d) => {
                assert_eq!(d.declared_type, cstep_core::lang::types::DeclTypeId::Float);
                assert_eq!(d.name, "y");
                let init = d.initializer.as_ref().unwrap();
                assert!(matches!(&init.node, Expr::Number(n) if n.kind == NumberKind::Float && n.text == "2.5"));
            }
            other => panic!("expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_left_associativity() {
        let program = parse_str("a = 1 - 2 - 3;").unwrap();
        assert_eq!(value_of(&program, 0), "((1 - 2) - 3)");
        let program = parse_str("a = 8 / 4 / 2;").unwrap();
        assert_eq!(value_of(&program, 0), "((8 / 4) / 2)");
    }

    #[test]
    fn test_precedence_and_parentheses() {
        let program = parse_str("a = 1 + 2 * 3;").unwrap();
        assert_eq!(value_of(&program, 0), "(1 + (2 * 3))");
        let program = parse_str("a = (1 + 2) * 3;").unwrap();
        assert_eq!(value_of(&program, 0), "((1 + 2) * 3)");
    }

    #[test]
    fn test_function_calls() {
        let program = parse_str("foo(1, \"two\", x + 3);").unwrap();
        match &program.statements[0].node {
            Statement::FunctionCall(c) => {
                assert_eq!(c.name, "foo");
                assert_eq!(c.args.len(), 3);
            }
            other => panic!("expected call, got {other:?}"),
        }
        assert_eq!(value_of(&program, 0), "1, \"two\", (x + 3)");

        let program = parse_str("bar();").unwrap();
        assert_eq!(value_of(&program, 0), "");
    }

    #[test]
    fn test_binary_op_line_is_operator_line() {
        let program = parse_str("a = 1\n+\n2;").unwrap();
        match &program.statements[0].node {
            Statement::Assignment(a) => assert_eq!(a.value.line, 2),
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_mismatch_reports_expected_and_found() {
        let err = parse_str("int 5x;").unwrap_err();
        assert_eq!(err.message, "Expected IDENTIFIER, got INTEGER");
        assert_eq!(err.expected.as_deref(), Some("IDENTIFIER"));
        assert_eq!(err.found.as_deref(), Some("INTEGER"));
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_value_mismatch() {
        let err = parse_str("x + 1;").unwrap_err();
        assert_eq!(err.message, "Expected '=', got '+'");
        assert_eq!(err.expected.as_deref(), Some("="));
        assert_eq!(err.found.as_deref(), Some("+"));
    }

    #[test]
    fn test_bare_identifier_statement_is_rejected() {
        let err = parse_str("x;").unwrap_err();
        assert_eq!(err.message, "Expected OPERATOR, got DELIMITER");
    }

    #[test]
    fn test_unexpected_leading_token() {
        let err = parse_str("\n\n42;").unwrap_err();
        assert_eq!(err.message, "Unexpected token INTEGER");
        assert_eq!(err.line, 3);
        let err = parse_str("return x;").unwrap_err();
        assert_eq!(err.message, "Unexpected token KEYWORD");
    }

    #[test]
    fn test_end_of_input() {
        let err = parse_str("int x = 1").unwrap_err();
        assert_eq!(err.message, "Unexpected end of input");
        let err = parse_str("foo(1,").unwrap_err();
        assert_eq!(err.message, "Unexpected end of input");
    }

    #[test]
    fn test_bad_primary() {
        let err = parse_str("a = ;").unwrap_err();
        assert_eq!(err.message, "Expected number, string, identifier, or '('");
        assert_eq!(err.found.as_deref(), Some("DELIMITER"));
    }

    #[test]
    fn test_declaration_keywords_come_from_vocabulary() {
        use crate::lexer::Lexer;
        use cstep_core::lang::types::{DECL_TYPES, DeclTypeId};
        use cstep_core::lang::{delimiters, keywords, operators};

        let floats_only: Vec<_> = DECL_TYPES.iter().copied().filter(|t| t.id == DeclTypeId::Float).collect();
        let vocab = Vocabulary::new(keywords::KEYWORDS, &floats_only, operators::OPERATORS, delimiters::DELIMITERS);

        let tokens = Lexer::new("float y; int x;", &vocab).tokenize().unwrap();
        let err = Parser::new(&tokens).with_vocabulary(&vocab).parse().unwrap_err();
        assert_eq!(err.message, "Unexpected token KEYWORD");
        assert_eq!(err.found.as_deref(), Some("KEYWORD"));

        // The standard vocabulary still accepts both.
        assert!(Parser::new(&tokens).parse().is_ok());
    }

    #[test]
    fn test_empty_token_list_parses() {
        let program = parse(&[]).unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_trace_stack_nests() {
        let (result, steps) = traced("x = 1;");
        assert!(result.is_ok());

        let rendered: Vec<String> = steps
            .iter()
            .map(|s| format!("{} {}", s.action.as_str(), s.stack.len()))
            .collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        START 1
        CHECK 1
        ROUTINE 2
        CONSUME 2
        ROUTINE 3
        CONSUME 3
        ROUTINE 4
        ROUTINE 5
        ROUTINE 6
        ROUTINE 7
        CONSUME 7
        CREATE_NODE 6
        COMPLETE 5
        COMPLETE 4
        COMPLETE 3
        CONSUME 3
        CREATE_NODE 3
        COMPLETE 2
        COMPLETE 1
        COMPLETE 0
        ");
    }

    #[test]
    fn test_every_routine_entry_is_matched() {
        let (result, steps) = traced("int a = (1 + b) * foo;\nbar(a, 2.0);");
        assert!(result.is_ok());

        let mut depth = 0usize;
        for step in &steps {
            match step.action {
                ParseAction::Start | ParseAction::Routine => depth += 1,
                ParseAction::Complete => depth -= 1,
                ParseAction::CreateNode if step.routine.is_some() => depth -= 1,
                _ => {}
            }
            assert_eq!(step.stack.len(), depth, "stack out of step at {:?}", step.message);
        }
        assert_eq!(depth, 0);
        assert_eq!(steps.last().map(|s| s.action), Some(ParseAction::Complete));
    }

    #[test]
    fn test_trace_kept_on_failure() {
        let (result, steps) = traced("int x = ;");
        assert!(result.is_err());
        let last = steps.last().unwrap();
        assert_eq!(last.action, ParseAction::Routine);
        assert_eq!(last.routine, Some(Routine::PrimaryExpression));
        assert_eq!(last.stack.first(), Some(&Routine::Program));
    }

    #[test]
    fn test_node_summaries_in_trace() {
        let (_, steps) = traced("y = 2 * 3;");
        let nodes: Vec<&str> = steps.iter().filter_map(|s| s.node_created.as_deref()).collect();
        assert_eq!(
            nodes,
            vec!["Number(2)", "Number(3)", "BinaryOp(*)", "Assignment(y)", "Program(1 statements)"]
        );
    }
}
