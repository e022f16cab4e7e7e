//! End-to-end tests for the cstep pipeline

use cstep::ast::Statement;
use cstep::{Analysis, AnalysisSuccess, analyze};
use serde_json::json;

fn expect_success(source: &str) -> Box<AnalysisSuccess> {
    match analyze(source) {
        Analysis::Success(ok) => ok,
        Analysis::Failure(f) => panic!("expected {source:?} to analyze, got {:?}", f.message),
    }
}

fn assignment_value(ok: &AnalysisSuccess) -> String {
    match &ok.program.statements[0].node {
        Statement::Assignment(a) => a.value.to_string(),
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn test_first_declaration_wins() {
    let ok = expect_success("int x;\nx = 2;\nfoo(x);");
    assert_eq!(ok.symbol_table.len(), 2);
    let x = ok.symbol_table.get("x").unwrap();
    assert_eq!(x.declared_line, 1);
    assert_eq!(x.size_in_bytes, Some(4));
    let foo = ok.symbol_table.get("foo").unwrap();
    assert_eq!(foo.declared_type, None);
    assert_eq!(foo.declared_line, 3);
}

#[test]
fn test_symbol_table_json() {
    let ok = expect_success("int x; float y;");
    assert_eq!(
        serde_json::to_value(&ok.symbol_table).unwrap(),
        json!({
            "x": {"declaredType": "int", "sizeInBytes": 4, "declaredLine": 1},
            "y": {"declaredType": "float", "sizeInBytes": 4, "declaredLine": 1},
        })
    );
}

#[test]
fn test_associativity_and_precedence() {
    assert_eq!(assignment_value(&expect_success("a = 1 - 2 - 3;")), "((1 - 2) - 3)");
    assert_eq!(assignment_value(&expect_success("a = 1 + 2 * 3;")), "(1 + (2 * 3))");
}

#[test]
fn test_call_arguments_in_ast() {
    let ok = expect_success("foo(1, 2, 3);");
    let call = &ok.ast["children"][0];
    assert_eq!(call["kind"], "FunctionCall");
    assert_eq!(call["functionName"], "foo");
    let args = call["children"].as_array().unwrap();
    assert_eq!(args.len(), 3);
    assert!(args.iter().all(|a| a["kind"] == "Number"));
}

#[test]
fn test_ast_json_shape() {
    let ok = expect_success("int x = 1 + 2;");
    assert_eq!(
        ok.ast,
        json!({
            "kind": "Program",
            "line": 1,
            "children": [{
                "kind": "Declaration",
                "line": 1,
                "declaredType": "int",
                "variableName": "x",
                "children": [{
                    "kind": "BinaryOp",
                    "line": 1,
                    "operator": "+",
                    "children": [
                        {"kind": "Number", "line": 1, "value": "1", "numberKind": "INTEGER"},
                        {"kind": "Number", "line": 1, "value": "2", "numberKind": "INTEGER"}
                    ]
                }]
            }]
        })
    );
}

#[test]
fn test_syntax_error_envelope() {
    let analysis = analyze("int 5x;");
    let failure = analysis.failure().unwrap();
    assert_eq!(failure.error_kind, "syntax");
    assert_eq!(failure.line, 1);
    assert_eq!(failure.expected.as_deref(), Some("IDENTIFIER"));
    assert_eq!(failure.found.as_deref(), Some("INTEGER"));
}

#[test]
fn test_unterminated_string_envelope() {
    let analysis = analyze("x = \"abc;");
    let failure = analysis.failure().unwrap();
    assert_eq!(failure.error_kind, "lexical");
    assert!(failure.message.contains("Unterminated string"));
    assert!(failure.parser_trace.is_empty());
    assert!(!failure.lexer_trace.is_empty());
}

#[test]
fn test_runs_are_repeatable() {
    let source = "int total = (a + 2) * 3;\nprint(\"sum\", total);";
    let first = expect_success(source);
    let second = expect_success(source);
    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.symbol_table, second.symbol_table);
    assert_eq!(first.ast, second.ast);

    let lexer_walk = |ok: &AnalysisSuccess| -> Vec<_> {
        ok.lexer_trace
            .iter()
            .map(|s| (s.action, s.position.line, s.position.column))
            .collect()
    };
    assert_eq!(lexer_walk(&first), lexer_walk(&second));
    let parser_walk =
        |ok: &AnalysisSuccess| -> Vec<_> { ok.parser_trace.iter().map(|s| (s.action, s.stack.len())).collect() };
    assert_eq!(parser_walk(&first), parser_walk(&second));
}

#[test]
fn test_program_rendering() {
    let ok = expect_success("int a = 2 * (b + 1);\nfloat r;\nr = a / 4 - 1.5;\nprint(\"r\", r, a * a);");
    insta::assert_snapshot!(ok.program.to_string().trim_end(), @r#"
    int a = (2 * (b + 1));
    float r;
    r = ((a / 4) - 1.5);
    print("r", r, (a * a));
    "#);
}

#[test]
fn test_unicode_identifier_assignment() {
    let ok = expect_success("café = 1;");
    assert_eq!(assignment_value(&ok), "1");
    assert!(ok.symbol_table.contains("café"));
}
