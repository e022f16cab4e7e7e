//! Property-based tests for the cstep front end
//!
//! These tests use proptest to check lexer and pipeline invariants across
//! randomly generated inputs.

use cstep::analyze;
use cstep::lexer::{self, TokenKind};
use proptest::prelude::*;

// Spellings that each lex to exactly one token
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,4}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "\"[a-z ]{0,5}\"",
        prop::sample::select(vec!["+", "-", "*", "/", "=", "==", "!=", "<=", "&&", "++", "!"]).prop_map(String::from),
        prop::sample::select(vec![";", ",", "(", ")", "{", "}"]).prop_map(String::from),
    ]
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lexer::lex(source).expect("Lex failed").iter().map(|t| t.kind).collect()
}

proptest! {
    /// Property: Whitespace-only input analyzes to nothing
    #[test]
    fn whitespace_only_is_empty(source in "[ \t\n]{0,24}") {
        let analysis = analyze(&source);
        let ok = analysis.success().expect("whitespace should analyze");
        prop_assert!(ok.tokens.is_empty());
        prop_assert!(ok.symbol_table.is_empty());
        prop_assert!(ok.program.statements.is_empty());
    }

    /// Property: Re-lexing the space-joined source text of a token list keeps the kinds
    #[test]
    fn token_kinds_survive_relexing(parts in prop::collection::vec(token_strategy(), 1..12)) {
        let source = parts.join(" ");
        let tokens = lexer::lex(&source).expect("Lex failed");
        let rebuilt: Vec<String> = tokens.iter().filter(|t| !t.is_eof()).map(|t| t.source_text()).collect();
        prop_assert_eq!(kinds(&source), kinds(&rebuilt.join(" ")));
    }

    /// Property: Every token's position points at its text in the source
    #[test]
    fn token_positions_match_source(parts in prop::collection::vec(token_strategy(), 1..12)) {
        let source = parts.join("\n ");
        for token in lexer::lex(&source).expect("Lex failed").iter().filter(|t| !t.is_eof()) {
            let start = token.position.offset;
            prop_assert_eq!(&source[start..start + token.source_len()], token.source_text());
        }
    }

    /// Property: The pipeline never panics and always yields one envelope
    #[test]
    fn arbitrary_input_yields_an_envelope(source in "\\PC{0,40}") {
        let analysis = analyze(&source);
        prop_assert!(analysis.to_json(false).is_ok());
    }
}
